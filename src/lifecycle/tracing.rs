//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven
//! by `RUST_LOG`. Module paths are hidden (`with_target(false)`); spans from
//! `#[instrument]` show inline instead.
//!
//! ```bash
//! # Mutations, refreshes and lifecycle
//! RUST_LOG=info cargo run
//!
//! # Plus every request and its payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a create from the management screen reads:
//!
//! ```text
//! DEBUG submit:create: Sending request draft=ResourceDraft { title: "Traits", .. }
//! INFO submit:create: Created id=12
//! DEBUG submit:create:refresh: Refreshing snapshot
//! INFO submit:create:refresh: Refreshed size=12
//! INFO submit: Submitted
//! ```
//!
//! Failures surface as `WARN` lines carrying an `error` field.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
