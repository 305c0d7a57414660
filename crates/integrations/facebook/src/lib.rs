pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::FacebookConfig;
pub use error::FacebookError;
pub use provider::FacebookProvider;
pub use types::{FeedPostRequest, FeedPostResponse};
