//! Scene record produced by every extraction path.
//!
//! Every field is optional and absent fields are omitted from the JSON output.
//! The setters below only store real values: empty strings and empty lists are
//! ignored, so a record never carries a placeholder.

use serde::{Deserialize, Serialize};

/// A named entity (studio, performer, tag) as serialized: `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

pub type Studio = Named;
pub type Performer = Named;
pub type Tag = Named;

/// Structured scene metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<Studio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performers: Option<Vec<Performer>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SceneRecord {
    /// A record with nothing determined.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no field has been set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.studio.is_none()
            && self.performers.is_none()
            && self.tags.is_none()
            && self.url.is_none()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if !title.is_empty() {
            self.title = Some(title);
        }
    }

    pub fn set_studio(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.studio = Some(Studio::new(name));
        }
    }

    /// Stores performers in the given order; duplicates are kept.
    pub fn set_performers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let performers = named_list(names);
        if !performers.is_empty() {
            self.performers = Some(performers);
        }
    }

    pub fn set_tags<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = named_list(names);
        if !tags.is_empty() {
            self.tags = Some(tags);
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !url.is_empty() {
            self.url = Some(url);
        }
    }

    pub fn has_title(&self) -> bool {
        self.title.is_some()
    }

    pub fn has_studio(&self) -> bool {
        self.studio.is_some()
    }

    /// Performer names in order, empty when none were found.
    pub fn performer_names(&self) -> Vec<&str> {
        self.performers
            .iter()
            .flatten()
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Serializes to a single line of JSON.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn named_list<I, S>(names: I) -> Vec<Named>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(Into::into)
        .filter(|name: &String| !name.is_empty())
        .map(Named::new)
        .collect()
}
