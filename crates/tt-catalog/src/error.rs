use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed `"DAY HH:MM-HH:MM"` session text.  Carries the offending
    /// text so the boundary can point at the bad row.
    #[error("error parsing session {text:?}: {reason}")]
    Session { text: String, reason: String },

    /// A credits field that is not a positive integer.
    #[error("invalid credits {0:?}: expected a positive integer")]
    Credits(String),

    /// A course row with both session fields empty.
    #[error("course {0:?} has no sessions")]
    Sessions(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
