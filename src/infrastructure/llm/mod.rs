mod mock_llm_client;
mod together_client;

pub use mock_llm_client::MockLlmClient;
pub use together_client::TogetherClient;
