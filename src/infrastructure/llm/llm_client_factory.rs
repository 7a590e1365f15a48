use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::presentation::config::LlmProvider;

use super::{EchoLlm, FakeListLlm};

pub struct LlmClientFactory;

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("client initialization failed: {0}")]
    InitializationFailed(String),
}

impl LlmClientFactory {
    pub fn create(
        provider: LlmProvider,
        responses: Vec<String>,
    ) -> Result<Arc<dyn LlmClient>, LlmClientFactoryError> {
        match provider {
            LlmProvider::Fake => {
                tracing::info!(responses = responses.len(), "Using canned-response LLM");
                let client = FakeListLlm::new(responses)
                    .map_err(|e| LlmClientFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            LlmProvider::Echo => {
                tracing::info!("Using echo LLM");
                Ok(Arc::new(EchoLlm))
            }
        }
    }
}
