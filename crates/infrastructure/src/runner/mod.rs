//! Host runner adapters.

mod next_request;

pub use next_request::NextRequestSlot;
