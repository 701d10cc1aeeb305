//! Error taxonomy for the writers.
//!
//! A rendering failure must never crash the host's output loop. Fallible
//! paths return `RenderError` through `try_render`; the infallible `render`
//! entry points log the diagnostic and degrade to an empty string.

use thiserror::Error;

/// Why a writer could not produce output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The requested interior has no drawable cells.
    #[error("invalid geometry: {width}x{height} interior")]
    InvalidGeometry { width: u16, height: u16 },

    /// An aggregate (max, sum) was required over an empty collection.
    #[error("nothing to render: {0}")]
    EmptyInput(&'static str),
}

/// Degrade a render result to the silent legacy behavior: log the diagnostic
/// and return an empty string. Ambient state is untouched because nothing
/// was emitted.
pub(crate) fn degrade(writer: &'static str, result: Result<String, RenderError>) -> String {
    match result {
        Ok(rendered) => rendered,
        Err(error) => {
            tracing::warn!(writer, %error, "render degraded to empty output");
            String::new()
        }
    }
}
