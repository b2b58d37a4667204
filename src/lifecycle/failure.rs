use std::fmt::Display;
use tracing::warn;

/// Log-and-discard for handler results.
///
/// The screens return every failure to the caller. A shell that has nowhere
/// to show an error calls `log_failure` to emit a `warn!` and move on.
///
/// ```rust
/// use resource_library::clients::TransportError;
/// use resource_library::lifecycle::LogFailure;
///
/// let failed: Result<usize, TransportError> = Err(TransportError::Unavailable);
/// assert_eq!(failed.log_failure("refresh"), None);
/// ```
pub trait LogFailure<T> {
    fn log_failure(self, context: &str) -> Option<T>;
}

impl<T, E: Display> LogFailure<T> for Result<T, E> {
    fn log_failure(self, context: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(error = %e, "{} failed", context);
                None
            }
        }
    }
}
