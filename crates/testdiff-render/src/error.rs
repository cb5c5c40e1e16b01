//! Error types for report rendering

use thiserror::Error;

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a comparison report
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to serialize the report to JSON
    #[error("failed to serialize report to JSON: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to render the HTML template
    #[error("failed to render HTML template: {message}")]
    Template { message: String },
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        RenderError::Template {
            message: err.to_string(),
        }
    }
}
