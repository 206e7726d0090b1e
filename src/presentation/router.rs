use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{EmotionClassifier, LlmClient, Translator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    ask_handler, ask_predefined_handler, health_handler, root_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L, E, T>(state: AppState<L, E, T>) -> Router
where
    L: LlmClient + 'static,
    E: EmotionClassifier + 'static,
    T: Translator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_upload_bytes = state.settings.extraction.max_file_size_mb * 1024 * 1024;

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/ask", post(ask_handler::<L, E, T>))
        .route("/ask_predefined", post(ask_predefined_handler::<L, E, T>))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
