pub mod channel;
pub mod receipt;
pub mod request;

pub use channel::{Channel, ChannelParseError};
pub use receipt::{DispatchReceipt, DispatchStatus};
pub use request::DispatchRequest;
