//! PTF Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (store, scheduler, reporter, persistence)
//! - The replay controller, response validator and request editing use cases
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{Clock, GlobalsRepository, KeyValueStore, NextRequestScheduler, Reporter};
pub use use_cases::{
    ReplayController, RequestBodyEditor, RequestRewriter, ResponseValidator, RewriteRule,
    get_global, get_global_json, log_context, read_request_body, remove_global, set_global,
    set_global_json,
};
