use std::io;
use thiserror::Error;
use crate::ircore::doc::DocumentFormat;

/// Failure of one document's text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("extractor panicked: {0}")]
    Panicked(String),
}

/// Everything a ranking request can fail with. The `Display` form is the
/// message shown to the user.
#[derive(Debug, Error)]
pub enum RankError {
    #[error("{0}")]
    Validation(String),

    #[error("Only {} files are supported. Please remove: {}", .format.label(), .files.join(", "))]
    UnsupportedFormat {
        format: DocumentFormat,
        files: Vec<String>,
    },

    #[error("{} processing library is not ready. Please wait a moment and try again.", .format.label())]
    DependencyUnavailable { format: DocumentFormat },

    #[error("Failed to process {name}: {cause}")]
    Extraction {
        name: String,
        #[source]
        cause: ExtractError,
    },

    #[error("Error: {0}")]
    Computation(String),
}
