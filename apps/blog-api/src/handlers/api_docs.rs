//! API documentation endpoint.

use actix_web::{HttpResponse, web};

use blog_shared::dto::ApiDocsQuery;

use crate::handlers::cors;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Swagger UI page loading the description from `api-docs`.
const SWAGGER_UI_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="description" content="SwaggerUI" />
  <title>SwaggerUI</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@4.5.0/swagger-ui.css" />
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://unpkg.com/swagger-ui-dist@4.5.0/swagger-ui-bundle.js" crossorigin></script>
<script>
  window.onload = () => {
    window.ui = SwaggerUIBundle({
      url: 'api-docs',
      dom_id: '#swagger-ui',
    });
  };
</script>
</body>
</html>"#;

/// GET /api-docs?ui=
///
/// The description is passed through verbatim; a non-empty `ui` value
/// returns the HTML viewer instead.
pub async fn api_docs(
    state: web::Data<AppState>,
    query: web::Query<ApiDocsQuery>,
) -> AppResult<HttpResponse> {
    let description = state.api_docs.fetch().await?;

    if !query.wants_ui() {
        return Ok(HttpResponse::Ok()
            .insert_header(cors::allow_all_origins())
            .content_type("application/json")
            .body(description));
    }

    Ok(HttpResponse::Ok()
        .content_type("text/html")
        .body(SWAGGER_UI_PAGE))
}
