//! The Resource Repository Client: the contract and its backends.

pub mod error;
pub mod http_client;
pub mod mock;
pub mod repository;

pub use error::*;
pub use http_client::*;
pub use repository::*;
