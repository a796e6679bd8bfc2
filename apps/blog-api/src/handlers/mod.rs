//! HTTP handlers and route configuration.

mod api_docs;
mod blog_posts;
pub mod cors;
mod health;

use actix_web::http::Method;
use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/blogposts")
                .route(web::post().to(blog_posts::create))
                .route(web::get().to(blog_posts::list))
                .route(web::method(Method::OPTIONS).to(cors::preflight)),
        )
        .service(
            web::resource("/blogposts/{id}")
                .route(web::get().to(blog_posts::get))
                .route(web::delete().to(blog_posts::delete))
                .route(web::method(Method::OPTIONS).to(cors::preflight)),
        )
        .service(
            web::resource("/api-docs")
                .route(web::get().to(api_docs::api_docs))
                .route(web::method(Method::OPTIONS).to(cors::preflight)),
        );
}
