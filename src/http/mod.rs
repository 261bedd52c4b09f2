//! HTTP protocol layer module
//!
//! Protocol-level building blocks (MIME detection, caching headers, range
//! parsing, response builders) shared by the static file handler and the
//! mock API, decoupled from routing.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

pub use range::{parse_range, RangeOutcome};
pub use response::{method_not_allowed, not_found, options, payload_too_large};
