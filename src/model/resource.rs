//! The Resource record and its draft form.

use serde::{Deserialize, Deserializer, Serialize};

use std::fmt::Display;

/// Opaque, server-assigned identifier for a Resource.
///
/// Some backends encode ids as JSON strings (`"12"`), others as numbers
/// (`12`). Both decode to the same string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceId(pub String);

impl ResourceId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

/// Represents a learning resource held by the remote collection.
///
/// # Identity
/// The `id` is always assigned by the remote store. A value of this type is a
/// *persisted* record; field values that have not been submitted yet live in a
/// [`ResourceDraft`] instead.
///
/// The remote collection is free to add bookkeeping fields (`createdAt`, ...);
/// they are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URI shown by the gallery.
    #[serde(default)]
    pub url: String,
    /// External link to the material itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Resource {
    /// Builds a persisted resource from a draft and the id the collection assigned.
    pub fn from_draft(id: ResourceId, draft: ResourceDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            url: draft.url,
            source: draft.source,
        }
    }

    /// The field values of this record, without its id.
    pub fn to_draft(&self) -> ResourceDraft {
        ResourceDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
        }
    }
}

/// Body of create and update requests.
///
/// Update is a full replace: every field of the stored record is overwritten,
/// including `source`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl ResourceDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: url.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_string_and_numeric_ids() {
        let text: Resource =
            serde_json::from_str(r#"{"id":"7","title":"Rust","description":"d","url":"u"}"#)
                .unwrap();
        let number: Resource =
            serde_json::from_str(r#"{"id":7,"title":"Rust","description":"d","url":"u"}"#)
                .unwrap();
        assert_eq!(text.id, ResourceId::from("7"));
        assert_eq!(text, number);
    }

    #[test]
    fn test_ignores_server_bookkeeping_fields() {
        let body = r#"{"createdAt":"2024-09-14T00:00:00Z","id":"1","title":"T","description":"D","url":"U","source":"S"}"#;
        let resource: Resource = serde_json::from_str(body).unwrap();
        assert_eq!(resource.source.as_deref(), Some("S"));
    }

    #[test]
    fn test_draft_without_source_omits_field() {
        let json = serde_json::to_value(ResourceDraft::new("T", "D", "U")).unwrap();
        assert!(json.get("source").is_none());
        assert_eq!(json["title"], "T");
    }
}
