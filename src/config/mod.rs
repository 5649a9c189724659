//! Layered configuration loading.
//!
//! Configuration is read from the first existing file among a fixed list of
//! candidate paths (working directory first, then the user config directory),
//! falling back to compiled-in defaults when no file exists. Partial documents
//! are valid: any field absent from the file keeps its default value.

mod builder;
mod loader;
mod paths;
mod types;

pub use builder::ConfigBuilder;
pub use paths::{APP_NAME, SearchPaths};
pub use types::Config;
