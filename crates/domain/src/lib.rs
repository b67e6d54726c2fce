//! PTF Domain - Core test-helper types
//!
//! This crate defines the data model shared by the test helpers:
//! endpoint descriptors, replay state, globals, requests, responses and
//! assertion results, plus the pure text codecs.
//! All types here are pure Rust with no I/O dependencies.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod globals;
pub mod replay;
pub mod request;
pub mod response;
pub mod testing;

pub use codec::{decode_structured_token, slugify};
pub use endpoint::{EndpointDescriptor, QUERY_OPTIONS_KEY, ResponseShape};
pub use error::{DecodeError, DomainError, DomainResult};
pub use globals::Globals;
pub use replay::{NextRequest, REPLAY_STATE_KEY, ReplayKey, ReplayState, ReplayTransition};
pub use request::{Header, Headers, OutgoingRequest, RequestBody, RequestBodyKind, SCOPE_HEADER};
pub use response::{ReceivedResponse, SUCCESS_STATUS};
pub use testing::{AssertionOutcome, AssertionResult, TestResults};
