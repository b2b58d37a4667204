//! Pure data structures (DTOs) exchanged with the remote collection.

pub mod resource;

pub use resource::*;
