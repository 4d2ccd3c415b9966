//! Shared plumbing for the Ely.by API crates.
//!
//! The surface crates (`ely-profiles`, `ely-yggdrasil`, `ely-oauth`) are
//! independent of each other; the only things they share live here: the
//! [`ElyError`] type, the [`Http`] request helper with its upstream error
//! mapping, and the wire models that appear on more than one surface.
//!
//! Diagnostics are emitted through `tracing`; install whatever subscriber
//! fits your application to receive them.

pub mod errors;
pub mod http;
pub mod models;

pub use errors::{ElyError, Result};
pub use http::{Http, HttpSettings};
pub use models::{Profile, Property};

// Re-exported so callers can match on `ElyError::Upstream { status, .. }`
// without a direct reqwest dependency.
pub use reqwest::StatusCode;
