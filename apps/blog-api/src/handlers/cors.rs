//! CORS headers and preflight responses.

use actix_web::HttpResponse;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderName,
};

pub const ALLOWED_METHODS: &str = "OPTIONS,GET,PUT,POST,DELETE,PATCH,HEAD";
pub const ALLOWED_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Amz-User-Agent";

/// `Access-Control-Allow-Origin: *`
pub fn allow_all_origins() -> (HeaderName, &'static str) {
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*")
}

/// OPTIONS handler for every API resource.
pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent()
        .insert_header(allow_all_origins())
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .finish()
}
