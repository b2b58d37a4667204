//! # List View-Model
//!
//! Derives what a screen shows from the store snapshot: a title search
//! ([`SearchNormalization`]) followed, on the management screen, by fixed-size
//! pages ([`Paginator`]). Nothing is memoized; every projection recomputes from
//! the snapshot, which holds tens to low hundreds of records.

pub mod list;
pub mod pagination;
pub mod search;

pub use list::*;
pub use pagination::*;
pub use search::*;
