pub mod config;
pub mod provider;
pub mod types;

pub use config::SmtpConfig;
pub use provider::EmailProvider;
pub use types::EmailPayload;
