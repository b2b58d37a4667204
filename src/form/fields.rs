//! Field values of the add/edit form and which of them are required.

use crate::model::{Resource, ResourceDraft};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Url,
    Source,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Url => "url",
            Field::Source => "source",
        };
        write!(f, "{}", name)
    }
}

/// Which fields must be non-empty before a submit is sent.
///
/// The two screens grew different rules: the first form has no source field,
/// the management form requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequiredFields {
    /// Title, description and url.
    #[default]
    Basic,
    /// Title, description, url and source.
    WithSource,
}

impl RequiredFields {
    pub fn fields(self) -> &'static [Field] {
        match self {
            RequiredFields::Basic => &[Field::Title, Field::Description, Field::Url],
            RequiredFields::WithSource => {
                &[Field::Title, Field::Description, Field::Url, Field::Source]
            }
        }
    }
}

/// Text currently typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
}

impl FormFields {
    pub fn from_resource(resource: &Resource) -> Self {
        Self {
            title: resource.title.clone(),
            description: resource.description.clone(),
            url: resource.url.clone(),
            source: resource.source.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Url => &self.url,
            Field::Source => &self.source,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::Url => self.url = value,
            Field::Source => self.source = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.url.is_empty()
            && self.source.is_empty()
    }

    /// First required field left empty, if any.
    pub fn first_missing(&self, required: RequiredFields) -> Option<Field> {
        required
            .fields()
            .iter()
            .copied()
            .find(|f| self.get(*f).is_empty())
    }

    /// Request body; an empty source is sent as absent.
    pub fn to_draft(&self) -> ResourceDraft {
        ResourceDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            url: self.url.clone(),
            source: (!self.source.is_empty()).then(|| self.source.clone()),
        }
    }
}
