//! Blog post handlers.
//!
//! Every response carries `Content-Type: application/json` and allows all
//! origins. A missing post is not an error: `GET` answers 200 with `null` and
//! `DELETE` answers 204 whether or not the post existed.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use blog_core::domain::{NewBlogPost, SortOrder};
use blog_shared::dto::{CreateBlogPostRequest, ListBlogPostsQuery};

use crate::handlers::cors;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(cors::allow_all_origins())
        .json(body)
}

/// POST /blogposts
pub async fn create(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    // Parsed by hand so the Content-Type of the request is not enforced
    let req: CreateBlogPostRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

    let input = NewBlogPost::validate(req.title, req.author, req.content)?;
    let post = state.blog_posts.create(input).await?;

    Ok(json_response(StatusCode::CREATED, &post))
}

/// GET /blogposts?order=asc|desc
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListBlogPostsQuery>,
) -> AppResult<HttpResponse> {
    let order = SortOrder::from_query(query.order.as_deref());
    let posts = state.blog_posts.list(order).await?;
    tracing::debug!(count = posts.len(), ?order, "Listing blog posts");

    Ok(json_response(StatusCode::OK, &posts))
}

/// GET /blogposts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.blog_posts.get(&id).await?;

    // `None` serializes as the JSON literal `null`
    Ok(json_response(StatusCode::OK, &post))
}

/// DELETE /blogposts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.blog_posts.delete(&id).await?;

    Ok(HttpResponse::NoContent()
        .insert_header(cors::allow_all_origins())
        .insert_header(ContentType::json())
        .finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use blog_core::domain::{BlogPost, format_timestamp};
    use blog_core::error::StoreError;
    use blog_core::ports::BlogPostRepository;
    use blog_infra::{InMemoryBlogPostStore, StaticDescriptionProvider};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn state_with(store: Arc<dyn BlogPostRepository>) -> AppState {
        AppState::new(store, Arc::new(StaticDescriptionProvider::new("test-api")))
    }

    fn state() -> AppState {
        state_with(Arc::new(InMemoryBlogPostStore::new()))
    }

    /// Store whose every call fails as if the backend were down.
    struct UnreachableStore;

    #[async_trait]
    impl BlogPostRepository for UnreachableStore {
        async fn put(&self, _post: &BlogPost) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn scan_all(&self) -> Result<Vec<BlogPost>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn get_by_id(&self, _id: &str) -> Result<Option<BlogPost>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn delete_by_id(&self, _id: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn create_request(title: &str, author: &str, content: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/blogposts")
            .set_json(json!({ "title": title, "author": author, "content": content }))
    }

    #[actix_web::test]
    async fn test_create_returns_created_post() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;
        let before = format_timestamp(chrono::Utc::now());

        let resp = test::call_service(&app, create_request("A", "X", "c1").to_request()).await;
        assert_eq!(resp.status(), 201);
        assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");
        assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");

        let post: BlogPost = test::read_body_json(resp).await;
        assert_eq!(post.id.get_version_num(), 4);
        assert_eq!(post.title, "A");
        assert_eq!(post.author, "X");
        assert_eq!(post.content, "c1");
        assert!(post.created_at >= before);
    }

    #[actix_web::test]
    async fn test_create_ignores_caller_supplied_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let caller_id = uuid::Uuid::new_v4();
        let req = test::TestRequest::post()
            .uri("/blogposts")
            .set_json(json!({
                "id": caller_id,
                "createdAt": "1999-01-01T00:00:00.000Z",
                "title": "A", "author": "X", "content": "c"
            }))
            .to_request();
        let post: BlogPost = test::call_and_read_body_json(&app, req).await;

        assert_ne!(post.id, caller_id);
        assert_ne!(post.created_at, "1999-01-01T00:00:00.000Z");
    }

    #[actix_web::test]
    async fn test_create_without_json_content_type() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/blogposts")
            .set_payload(r#"{"title":"A","author":"X","content":"c"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    #[actix_web::test]
    async fn test_create_rejects_missing_fields() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/blogposts")
            .set_json(json!({ "title": "A" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["invalid_fields"], json!(["author", "content"]));

        // Nothing was persisted
        let req = test::TestRequest::get().uri("/blogposts").to_request();
        let posts: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts, json!([]));
    }

    #[actix_web::test]
    async fn test_create_rejects_malformed_json() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        for payload in ["not json", r#"{"title":1,"author":"X","content":"c"}"#] {
            let req = test::TestRequest::post()
                .uri("/blogposts")
                .set_payload(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);
        }
    }

    #[actix_web::test]
    async fn test_create_then_get_roundtrip() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let created: BlogPost =
            test::call_and_read_body_json(&app, create_request("A", "X", "c1").to_request()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/blogposts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");

        let fetched: BlogPost = test::read_body_json(resp).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_get_missing_returns_null_with_ok() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let req = test::TestRequest::get()
                .uri(&format!("/blogposts/{}", id))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
            assert_eq!(resp.headers().get("content-type").unwrap(), "application/json");

            let body = test::read_body(resp).await;
            assert_eq!(body, "null");
        }
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let created: BlogPost =
            test::call_and_read_body_json(&app, create_request("A", "X", "c1").to_request()).await;
        let uri = format!("/blogposts/{}", created.id);

        for _ in 0..2 {
            let req = test::TestRequest::delete().uri(&uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 204);
            assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
            assert!(test::read_body(resp).await.is_empty());
        }

        let req = test::TestRequest::delete()
            .uri("/blogposts/never-existed")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn test_list_empty_store_is_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/blogposts").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        assert_eq!(body, "[]");
    }

    #[actix_web::test]
    async fn test_list_order_and_delete_scenario() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        let a: BlogPost =
            test::call_and_read_body_json(&app, create_request("A", "X", "c1").to_request()).await;
        // Timestamps have millisecond resolution
        actix_rt::time::sleep(Duration::from_millis(5)).await;
        let b: BlogPost =
            test::call_and_read_body_json(&app, create_request("B", "Y", "c2").to_request()).await;

        let titles = |posts: Vec<BlogPost>| -> Vec<String> {
            posts.into_iter().map(|p| p.title).collect()
        };

        let req = test::TestRequest::get().uri("/blogposts?order=asc").to_request();
        let asc: Vec<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(titles(asc), ["A", "B"]);

        for uri in ["/blogposts", "/blogposts?order=desc", "/blogposts?order=newest"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let desc: Vec<BlogPost> = test::call_and_read_body_json(&app, req).await;
            assert_eq!(titles(desc), ["B", "A"]);
        }

        let req = test::TestRequest::delete()
            .uri(&format!("/blogposts/{}", a.id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);

        let req = test::TestRequest::get()
            .uri(&format!("/blogposts/{}", a.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "null");

        let req = test::TestRequest::get().uri("/blogposts").to_request();
        let remaining: Vec<BlogPost> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(remaining, vec![b]);
    }

    #[actix_web::test]
    async fn test_store_failure_is_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(Arc::new(UnreachableStore))))
                .configure(configure_routes),
        )
        .await;

        let requests = [
            create_request("A", "X", "c").to_request(),
            test::TestRequest::get().uri("/blogposts").to_request(),
            test::TestRequest::get().uri("/blogposts/abc").to_request(),
            test::TestRequest::delete().uri("/blogposts/abc").to_request(),
        ];
        for req in requests {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 500);
            assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], 500);
        }
    }

    #[actix_web::test]
    async fn test_preflight() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure_routes),
        )
        .await;

        for uri in ["/blogposts", "/blogposts/abc", "/api-docs"] {
            let req = test::TestRequest::default()
                .method(actix_web::http::Method::OPTIONS)
                .uri(uri)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 204);
            assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
            assert_eq!(
                resp.headers().get("access-control-allow-methods").unwrap(),
                crate::handlers::cors::ALLOWED_METHODS
            );
        }
    }
}
