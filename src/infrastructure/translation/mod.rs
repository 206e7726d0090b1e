mod libre_translate_client;
mod mock_translator;

pub use libre_translate_client::LibreTranslateClient;
pub use mock_translator::MockTranslator;
