//! Parsed entries
//!
//!     [`EntryDraft`] accumulates metadata while the parser walks a file. When the file is done
//!     it is frozen into an [`Entry`], which has no mutators.
//!
//!     The canonical map produced by [`Entry::to_map`] is the payload sent to the blog API. Its
//!     `signature` member lets a sync run tell whether the remote copy is up to date without
//!     downloading it.

use crate::signature::signature;
use serde::Serialize;
use serde_json::{Map, Value};

/// Position of an entry within a named series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesRef {
    #[serde(rename = "series")]
    pub name: String,
    pub index: i64,
}

/// Metadata collected while parsing, before content is rendered.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntryDraft {
    pub title: Option<String>,
    pub metalink: Option<String>,
    pub symlink: Option<String>,
    pub redirect_url: Option<String>,
    pub series: Vec<SeriesRef>,
    pub tags: Vec<String>,
    pub public_id: Option<i64>,
    pub publish: bool,
}

impl EntryDraft {
    pub fn freeze(self, content: String, summary: Option<String>) -> Entry {
        Entry {
            content,
            summary,
            title: self.title,
            metalink: self.metalink,
            symlink: self.symlink,
            redirect_url: self.redirect_url,
            series: self.series,
            tags: self.tags,
            public_id: self.public_id,
            publish: self.publish,
        }
    }
}

/// One parsed source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    content: String,
    summary: Option<String>,
    title: Option<String>,
    metalink: Option<String>,
    symlink: Option<String>,
    redirect_url: Option<String>,
    series: Vec<SeriesRef>,
    tags: Vec<String>,
    public_id: Option<i64>,
    publish: bool,
}

impl Entry {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn metalink(&self) -> Option<&str> {
        self.metalink.as_deref()
    }

    pub fn symlink(&self) -> Option<&str> {
        self.symlink.as_deref()
    }

    pub fn redirect_url(&self) -> Option<&str> {
        self.redirect_url.as_deref()
    }

    pub fn series(&self) -> &[SeriesRef] {
        &self.series
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn public_id(&self) -> Option<i64> {
        self.public_id
    }

    /// Whether a `public` directive for the parse target was seen.
    pub fn is_published(&self) -> bool {
        self.publish
    }

    /// Published but not yet assigned an id by the remote side.
    pub fn is_new(&self) -> bool {
        self.public_id.is_none()
    }

    /// The fields covered by the signature.
    fn signed_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(url) = &self.redirect_url {
            map.insert("url".into(), Value::String(url.clone()));
            return map;
        }
        map.insert("body".into(), Value::String(self.content.clone()));
        // String and integer fields only, serialisation cannot fail.
        let series = serde_json::to_value(&self.series).unwrap_or_default();
        map.insert("series".into(), series);
        if let Some(title) = &self.title {
            map.insert("title".into(), Value::String(title.clone()));
        }
        if let Some(symlink) = &self.symlink {
            map.insert("symlink".into(), Value::String(symlink.clone()));
        }
        if let Some(summary) = &self.summary {
            map.insert("summary".into(), Value::String(summary.clone()));
        }
        if !self.tags.is_empty() {
            let tags = self.tags.iter().cloned().map(Value::String).collect();
            map.insert("tags".into(), Value::Array(tags));
        }
        if let Some(metalink) = &self.metalink {
            map.insert("metalink".into(), Value::String(metalink.clone()));
        }
        map
    }

    pub fn signature(&self) -> String {
        signature(&Value::Object(self.signed_map()))
    }

    /// Canonical map: the signed fields, then `signature`, then `id` when known.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.signed_map();
        let sig = signature(&Value::Object(map.clone()));
        map.insert("signature".into(), Value::String(sig));
        if let Some(id) = self.public_id {
            map.insert("id".into(), Value::from(id));
        }
        map
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.to_map()).to_string()
    }
}
