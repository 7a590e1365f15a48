use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

pub const DEMO_RESPONSE: &str = "This is a demonstration of LangChain integration.";

/// Replays a fixed list of responses in order, wrapping after the last one.
/// The prompt is ignored.
pub struct FakeListLlm {
    responses: Vec<String>,
    cursor: AtomicUsize,
}

impl FakeListLlm {
    pub fn new(responses: Vec<String>) -> Result<Self, LlmClientError> {
        if responses.is_empty() {
            return Err(LlmClientError::NoResponses);
        }

        Ok(Self {
            responses,
            cursor: AtomicUsize::new(0),
        })
    }

    pub fn demo() -> Self {
        Self {
            responses: vec![DEMO_RESPONSE.to_string()],
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    fn next_index(&self) -> usize {
        let len = self.responses.len();
        self.cursor
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len))
            .unwrap_or_else(|i| i)
    }
}

#[async_trait]
impl LlmClient for FakeListLlm {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.responses[self.next_index()].clone())
    }
}
