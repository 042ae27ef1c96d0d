//! Error types for recipe loading and backend reporting.

use thiserror::Error;

/// Errors that can occur while loading a recipe.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for errors raised by rendering backends.
///
/// Backends implement this so the CLI can report failures uniformly.
///
/// # Example
///
/// ```
/// use soundgen_spec::BackendError;
///
/// fn handle_error<E: BackendError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "AUDIO_001". Codes are stable and can be
    /// matched programmatically.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

impl BackendError for RecipeError {
    fn code(&self) -> &'static str {
        match self {
            RecipeError::JsonParse(_) => "RECIPE_001",
            RecipeError::Io(_) => "RECIPE_002",
        }
    }

    fn category(&self) -> &'static str {
        "recipe"
    }
}
