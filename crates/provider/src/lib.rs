pub mod error;
pub mod provider;
pub mod simulated;

pub use error::ProviderError;
pub use provider::{DynProvider, Provider};
pub use simulated::SimulatedProvider;
