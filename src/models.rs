//! Record models for the playlist store
//! These map directly to documents in the "Playlist" collection

use bson::oid::ObjectId;
use bson::{DateTime, Document, doc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::query::Projection;

/// Playlist record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Store-assigned identity, immutable after insert
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Playlist name
    pub name: String,
    /// Free-form category label ("Front End", "Back End", "Database", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Number of videos in the playlist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<i64>,
    /// Author name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Whether the playlist is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// When the record was created
    pub created_at: DateTime,
}

impl Playlist {
    /// Creation time as a chrono UTC timestamp
    pub fn created_at_utc(&self) -> chrono::DateTime<chrono::Utc> {
        self.created_at.to_chrono()
    }
}

// ============ Input structs for creating and updating records ============

/// Input for creating a new playlist record
#[derive(Debug, Clone, Default)]
pub struct NewPlaylist {
    pub name: String,
    pub content_type: Option<String>,
    pub video_count: Option<i64>,
    pub author: Option<String>,
    pub active: Option<bool>,
    /// Creation time override; record-creation time when unset
    pub created_at: Option<DateTime>,
}

impl NewPlaylist {
    /// Input with the given name and everything else unset
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("playlist name is required"));
        }
        Ok(())
    }

    /// Build the stored record, assigning identity and creation time
    pub(crate) fn into_record(self) -> Playlist {
        Playlist {
            id: ObjectId::new(),
            name: self.name,
            content_type: self.content_type,
            video_count: self.video_count,
            author: self.author,
            active: self.active,
            created_at: self.created_at.unwrap_or_else(DateTime::now),
        }
    }
}

/// Field-subset update for a playlist record
/// Only set fields are written; identity and creation time never change
#[derive(Debug, Clone, Default)]
pub struct PlaylistPatch {
    pub name: Option<String>,
    pub content_type: Option<String>,
    pub video_count: Option<i64>,
    pub author: Option<String>,
    pub active: Option<bool>,
}

impl PlaylistPatch {
    /// Patch renaming the record
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the patch changes anything
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.content_type.is_none()
            && self.video_count.is_none()
            && self.author.is_none()
            && self.active.is_none()
    }

    /// Check the patch is applicable
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::validation("patch must set at least one field"));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(Error::validation("playlist name cannot be empty"));
            }
        }
        Ok(())
    }

    /// Render as a `$set` update document
    pub(crate) fn to_update_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name);
        }
        if let Some(content_type) = &self.content_type {
            set.insert("contentType", content_type);
        }
        if let Some(video_count) = self.video_count {
            set.insert("videoCount", video_count);
        }
        if let Some(author) = &self.author {
            set.insert("author", author);
        }
        if let Some(active) = self.active {
            set.insert("active", active);
        }
        doc! { "$set": set }
    }
}

/// Options for `update_by_id`
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Return the updated record instead of the prior one
    pub return_updated: bool,
    /// Trim the returned record to the projected fields
    pub projection: Option<Projection>,
}
