use thiserror::Error;

/// The top-level error type for `tt-core`.
///
/// Both variants carry the offending input text so boundary code can report
/// exactly which value failed to parse.
#[derive(Debug, Error)]
pub enum TtError {
    #[error("invalid time of day {0:?}: expected 24-hour HH:MM")]
    Time(String),

    #[error("invalid time range {0:?}: expected HH:MM-HH:MM")]
    Range(String),
}

/// Shorthand result type for `tt-core` operations.
pub type TtResult<T> = Result<T, TtError>;
