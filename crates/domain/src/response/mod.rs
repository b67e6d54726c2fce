//! Received response types

mod received;

pub use received::{ReceivedResponse, SUCCESS_STATUS};
