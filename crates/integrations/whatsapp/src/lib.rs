pub mod launcher;
pub mod provider;
pub mod schedule;

pub use launcher::{SystemLauncher, UrlLauncher};
pub use provider::WhatsAppProvider;
