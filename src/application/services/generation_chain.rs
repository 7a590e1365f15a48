use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{PromptTemplate, TemplateError};
use crate::infrastructure::observability::sanitize_prompt;

/// Formats a query through a prompt template and hands the result to an
/// [`LlmClient`].
pub struct GenerationChain<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
    template: PromptTemplate,
}

impl<L> GenerationChain<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>, template: PromptTemplate) -> Self {
        Self {
            llm_client,
            template,
        }
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub async fn run(&self, query: &str) -> Result<String, ChainError> {
        self.invoke(query).await.map(|outcome| outcome.text)
    }

    pub async fn invoke(&self, query: &str) -> Result<GenerationOutcome, ChainError> {
        let prompt = self.template.format_single(query)?;

        tracing::debug!(prompt = %sanitize_prompt(&prompt), "Formatted prompt");

        let text = self
            .llm_client
            .complete(&prompt)
            .await
            .map_err(ChainError::Completion)?;

        tracing::info!(response_len = text.len(), "Generation completed");

        Ok(GenerationOutcome { prompt, text })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub prompt: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("template: {0}")]
    Template(#[from] TemplateError),
    #[error("completion: {0}")]
    Completion(LlmClientError),
}
