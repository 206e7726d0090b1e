mod ask;
mod ask_predefined;
mod health;
mod models;
mod root;

pub use ask::ask_handler;
pub use ask_predefined::{ask_predefined_handler, AskPredefinedRequest};
pub use health::health_handler;
pub use models::{answer_error_status, AnswerResponse, ErrorResponse};
pub use root::root_handler;
