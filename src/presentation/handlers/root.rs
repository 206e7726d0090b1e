use axum::response::{Html, IntoResponse};

pub async fn root_handler() -> impl IntoResponse {
    Html("<h2>📄 Document Q&A API is running</h2>")
}
