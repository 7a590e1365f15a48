use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::application::services::GenerationChain;

pub struct AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub generation_chain: Arc<GenerationChain<L>>,
}

impl<L> AppState<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(generation_chain: Arc<GenerationChain<L>>) -> Self {
        Self { generation_chain }
    }
}

impl<L> Clone for AppState<L>
where
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            generation_chain: Arc::clone(&self.generation_chain),
        }
    }
}
