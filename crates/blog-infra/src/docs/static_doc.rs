//! Built-in Swagger 2.0 description of the blog post HTTP surface.

use async_trait::async_trait;
use serde_json::{Value, json};

use blog_core::ports::{ApiDescriptionProvider, DescriptionError};

/// Serves a description generated from the known routes.
pub struct StaticDescriptionProvider {
    api_id: String,
}

impl StaticDescriptionProvider {
    pub fn new(api_id: impl Into<String>) -> Self {
        Self {
            api_id: api_id.into(),
        }
    }

    fn document(&self) -> Value {
        let post_ref = json!({ "$ref": "#/definitions/BlogPost" });
        let id_param = json!({ "name": "id", "in": "path", "required": true, "type": "string" });

        json!({
            "swagger": "2.0",
            "info": { "title": self.api_id, "version": env!("CARGO_PKG_VERSION") },
            "schemes": ["https"],
            "produces": ["application/json"],
            "paths": {
                "/blogposts": {
                    "get": {
                        "parameters": [
                            { "name": "order", "in": "query", "required": false, "type": "string" }
                        ],
                        "responses": {
                            "200": { "description": "Posts sorted by createdAt",
                                     "schema": { "type": "array", "items": post_ref } }
                        }
                    },
                    "post": {
                        "parameters": [
                            { "name": "body", "in": "body", "required": true,
                              "schema": { "$ref": "#/definitions/CreateBlogPost" } }
                        ],
                        "responses": {
                            "201": { "description": "Created post", "schema": post_ref }
                        }
                    }
                },
                "/blogposts/{id}": {
                    "get": {
                        "parameters": [id_param],
                        "responses": {
                            "200": { "description": "The post, or null when absent", "schema": post_ref }
                        }
                    },
                    "delete": {
                        "parameters": [id_param],
                        "responses": { "204": { "description": "Deleted" } }
                    }
                },
                "/api-docs": {
                    "get": {
                        "parameters": [
                            { "name": "ui", "in": "query", "required": false, "type": "string" }
                        ],
                        "responses": { "200": { "description": "This document or its viewer" } }
                    }
                }
            },
            "definitions": {
                "CreateBlogPost": {
                    "type": "object",
                    "required": ["title", "author", "content"],
                    "properties": {
                        "title": { "type": "string" },
                        "author": { "type": "string" },
                        "content": { "type": "string" }
                    }
                },
                "BlogPost": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "format": "uuid" },
                        "title": { "type": "string" },
                        "author": { "type": "string" },
                        "content": { "type": "string" },
                        "createdAt": { "type": "string", "format": "date-time" }
                    }
                }
            }
        })
    }
}

#[async_trait]
impl ApiDescriptionProvider for StaticDescriptionProvider {
    async fn fetch(&self) -> Result<String, DescriptionError> {
        serde_json::to_string(&self.document()).map_err(|e| DescriptionError::Render(e.to_string()))
    }
}
