use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

pub struct EchoLlm;

#[async_trait]
impl LlmClient for EchoLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        Ok(format!("Echo: {}", prompt))
    }
}
