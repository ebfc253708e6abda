//! Text extraction backends and the registry that makes them available.
//!
//! A backend turns the raw bytes of one document into its text. Backends are
//! looked up by [`DocumentFormat`](crate::ircore::doc::DocumentFormat); a
//! format with no registered backend is "not ready" and requests for it are
//! refused before any work starts.

pub mod pdf;
pub mod registry;
pub mod text;

use crate::ircore::error::ExtractError;

pub use registry::{global, init, ExtractorRegistry};

pub trait TextExtractor: Send + Sync {
    fn extract(&self, content: &[u8]) -> Result<String, ExtractError>;
}
