//! # Screens
//!
//! Controllers for the two screens of the application. Each holds an
//! `Arc<ResourceStore>` injected at construction, so a change made through one
//! screen is visible in the other as soon as the store resyncs.
//!
//! - [`GalleryScreen`] - library view, accent-insensitive search, detail modal
//! - [`ManageScreen`] - CRUD view, pagination, add/edit form, lookup by id
//!
//! Handlers return `Result`s; whether a failure is shown, logged or ignored is
//! up to the shell (see [`LogFailure`](crate::lifecycle::LogFailure)).

pub mod gallery;
pub mod manage;

pub use gallery::*;
pub use manage::*;
