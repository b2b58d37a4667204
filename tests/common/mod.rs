//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod fake_collection;

use resource_library::model::{ResourceDraft, ResourceId};

pub fn draft(title: &str) -> ResourceDraft {
    ResourceDraft::new(title, format!("About {}", title), format!("https://img/{}.png", title))
        .with_source(format!("https://src/{}", title))
}

pub fn id(value: &str) -> ResourceId {
    ResourceId::from(value)
}
