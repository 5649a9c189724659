//! Core service seam.
//!
//! `Service` is the extension point for real business logic. The scaffold
//! ships `EchoService`, a placeholder that tags its input, so the CLI wiring
//! can be exercised end to end before any real logic exists.

use crate::logging::Logger;
use anyhow::Result;

/// Core operation interface.
pub trait Service {
    /// Perform the main business logic on `input`.
    fn process(&self, input: &str) -> Result<String>;
}

/// Placeholder implementation: returns the input tagged as processed.
pub struct EchoService {
    logger: Logger,
}

impl EchoService {
    /// Create a service using the given logger.
    pub fn new(logger: Logger) -> Self {
        Self {
            logger: logger.with_name("service"),
        }
    }
}

impl Service for EchoService {
    fn process(&self, input: &str) -> Result<String> {
        self.logger.debug(&format!("processing {} bytes", input.len()));
        Ok(format!("Processed: {input}"))
    }
}
