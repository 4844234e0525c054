use axum::{http::header, response::IntoResponse};

pub const SWAGGER_DOCUMENT: &str = include_str!("../../swagger.yaml");

pub async fn get_swagger() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/yaml")], SWAGGER_DOCUMENT)
}
