//! Use cases
//!
//! Operations test scripts call directly. Each works against the ports in
//! [`crate::ports`] and never touches I/O itself.

mod context;
mod globals;
mod replay_controller;
mod request_body;
mod rewrite_request;
mod validate_response;

pub use context::log_context;
pub use globals::{get_global, get_global_json, remove_global, set_global, set_global_json};
pub use replay_controller::ReplayController;
pub use request_body::{RequestBodyEditor, read_request_body};
pub use rewrite_request::{RequestRewriter, RewriteRule};
pub use validate_response::{ERROR_KEYS, ERROR_SHAPE_LABEL, OPTION_ITEM_KEYS, ResponseValidator};
