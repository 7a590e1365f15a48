mod echo_llm;
mod fake_list_llm;
mod llm_client_factory;

pub use echo_llm::EchoLlm;
pub use fake_list_llm::{DEMO_RESPONSE, FakeListLlm};
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
