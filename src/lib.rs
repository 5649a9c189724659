//! keel: a starter scaffold for command-line tools.
//!
//! Wires together a clap CLI, a layered YAML configuration loader with fixed
//! search paths, a leveled logger with key/value context, a service seam for
//! business logic, and fluent fixture builders for tests. The service and API
//! client are intentionally thin placeholders; the configuration subsystem in
//! [`config`] is the part meant to be used as-is.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod testutil;
pub mod version;
