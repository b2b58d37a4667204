//! # Form/Edit State Machine
//!
//! Tracks whether the add/edit form creates a new record or edits an existing
//! one, holds the typed field values, and submits them through the
//! [`ResourceStore`](crate::store::ResourceStore).
//!
//! ## Structure
//!
//! - [`fields`] - [`FormFields`], [`Field`] and the [`RequiredFields`] rules
//! - [`editor`] - [`ResourceForm`], the state machine itself
//! - [`error`] - [`FormError`]

pub mod editor;
pub mod error;
pub mod fields;

pub use editor::*;
pub use error::*;
pub use fields::*;
