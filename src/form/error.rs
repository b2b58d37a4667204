//! Error types for form submission.

use crate::clients::TransportError;
use crate::form::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    /// A required field is empty; nothing was sent.
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// The repository rejected or never received the request.
    #[error("Submit failed: {0}")]
    Transport(#[from] TransportError),
}
