//! # Resource Library
//!
//! > **A client-side core for browsing and managing a collection of learning resources.**
//!
//! Each resource has a title, a description, an image URL and an optional
//! source link. The records live in a remote REST collection; this crate holds
//! the shared snapshot of that collection and the state behind two screens:
//! a read-only **gallery** and a **management** screen with search, pages of
//! five, an add/edit form, delete and lookup by id. Rendering is left to the
//! shell that drives the screens.
//!
//! ## Architecture Notes
//!
//! ### 1. One snapshot, shared explicitly
//! Both screens receive the same `Arc<ResourceStore>` at construction. The
//! snapshot is swapped atomically in a `tokio::sync::watch` channel, so a record
//! created from the management screen shows up in the gallery after the resync.
//!
//! ### 2. The repository is a trait
//! [`ResourceRepository`](clients::ResourceRepository) has three
//! implementations: the HTTP client, the in-memory collection actor, and the
//! expectation-driven mock used in tests.
//!
//! ### 3. Errors are values
//! Every operation returns a `Result` with a `thiserror` enum. Nothing is
//! swallowed in the core; a shell that only wants a log line uses
//! [`LogFailure`](lifecycle::LogFailure).
//!
//! ### 4. Observability
//! `tracing` throughout, with `#[instrument]` spans on requests and mutations.
//! See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! - [`model`] - `Resource`, `ResourceDraft`, `ResourceId`
//! - [`clients`] - the repository trait, HTTP client, transport errors, mock
//! - [`collection`] - in-memory collection actor
//! - [`store`] - shared snapshot and mutation strategies
//! - [`view_model`] - search normalization, pagination, list projection
//! - [`form`] - add/edit form state machine
//! - [`screens`] - gallery and management controllers
//! - [`config`] - environment configuration
//! - [`lifecycle`] - composition root, tracing setup
//!
//! ## Quick Start
//!
//! ```bash
//! # Against the hosted collection
//! RUST_LOG=info cargo run
//!
//! # Offline, with sample records
//! RESOURCES_BACKEND=memory RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod collection;
pub mod config;
pub mod form;
pub mod lifecycle;
pub mod model;
pub mod screens;
pub mod store;
pub mod view_model;
