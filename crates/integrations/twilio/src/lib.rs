pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::TwilioConfig;
pub use error::TwilioError;
pub use provider::TwilioProvider;
pub use types::{CallResource, CreateCallRequest, MessageResource, SendMessageRequest};
