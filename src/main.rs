use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use genai_svc::application::services::GenerationChain;
use genai_svc::domain::PromptTemplate;
use genai_svc::infrastructure::llm::{DEMO_RESPONSE, LlmClientFactory};
use genai_svc::infrastructure::observability::{TracingConfig, init_tracing};
use genai_svc::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("failed to load settings")?;

    init_tracing(TracingConfig::from(&settings), settings.server.port);

    let llm_client =
        LlmClientFactory::create(settings.llm.provider, vec![DEMO_RESPONSE.to_string()])?;
    let template = PromptTemplate::question_answer()?;
    let generation_chain = Arc::new(GenerationChain::new(llm_client, template));

    let router = create_router(AppState::new(generation_chain));

    let addr = settings.server.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(addr = %addr, provider = ?settings.llm.provider, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
