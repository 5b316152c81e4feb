use thiserror::Error;

/// Errors raised by mention configuration, template rendering and input loading.
///
/// Path misses are not errors: resolution returns `None` and the caller
/// degrades to "no suggestions" or the template fallback.
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("Trigger marker must not be empty")]
    EmptyTrigger,

    #[error("Closing marker must not be empty (omit it to disable closing)")]
    EmptyClosingTrigger,

    #[error("Trigger and closing marker are both {0:?}")]
    TriggerEqualsClosing(String),

    #[error("Path not found: {path}")]
    Unresolved { path: String },

    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MentionError {
    /// True for errors that indicate a programmer mistake in the widget setup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MentionError::EmptyTrigger
                | MentionError::EmptyClosingTrigger
                | MentionError::TriggerEqualsClosing(_)
        )
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
