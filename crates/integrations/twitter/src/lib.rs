pub mod config;
pub mod error;
pub mod oauth1;
pub mod provider;
pub mod types;

pub use config::TwitterConfig;
pub use error::TwitterError;
pub use provider::TwitterProvider;
pub use types::{TweetRequest, TweetResponse};
