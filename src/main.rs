use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use lector::application::ports::FileLoader;
use lector::application::services::AnswerService;
use lector::domain::DocumentFormat;
use lector::infrastructure::emotion::HuggingFaceClassifier;
use lector::infrastructure::llm::TogetherClient;
use lector::infrastructure::observability::{init_tracing, TracingConfig};
use lector::infrastructure::text_processing::{
    CompositeFileLoader, DocxAdapter, PdfAdapter, PlainTextAdapter,
};
use lector::infrastructure::translation::LibreTranslateClient;
use lector::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env().context("failed to load settings")?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.enable_json,
        },
        settings.server.port,
    );

    let file_loader = Arc::new(CompositeFileLoader::new(vec![
        (
            DocumentFormat::Pdf,
            Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
        ),
        (
            DocumentFormat::Docx,
            Arc::new(DocxAdapter::new()) as Arc<dyn FileLoader>,
        ),
        (
            DocumentFormat::Txt,
            Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
        ),
    ]));

    let llm_client = Arc::new(TogetherClient::new(
        &settings.llm.base_url,
        &settings.llm.api_key,
        &settings.llm.model,
    ));

    let emotion_classifier = Arc::new(HuggingFaceClassifier::new(
        &settings.emotion.base_url,
        &settings.emotion.model,
        settings.emotion.api_key.as_deref(),
    ));

    let translator = Arc::new(LibreTranslateClient::new(
        &settings.translation.base_url,
        settings.translation.api_key.as_deref(),
    ));

    let answer_service = Arc::new(AnswerService::new(
        file_loader,
        llm_client,
        emotion_classifier,
        translator,
        settings.translation.failure_policy,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        answer_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
