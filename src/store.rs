//! Playlist store - main entry point
//! Delegates to the ops module for actual operations

use bson::Document;
use bson::oid::ObjectId;
use mongodb::{Collection, Cursor};

use crate::error::Result;
use crate::models::{NewPlaylist, Playlist, PlaylistPatch, UpdateOptions};
use crate::ops;
use crate::query::{Filter, Query};

/// Typed CRUD access to the "Playlist" collection
#[derive(Debug, Clone)]
pub struct PlaylistStore {
    collection: Collection<Playlist>,
}

impl PlaylistStore {
    pub(crate) fn new(collection: Collection<Playlist>) -> Self {
        Self { collection }
    }

    // ============ Insert Operations ============

    pub async fn insert_one(&self, input: NewPlaylist) -> Result<Playlist> {
        ops::insert_playlist(&self.collection, input).await
    }

    pub async fn insert_many(&self, inputs: Vec<NewPlaylist>) -> Result<Vec<Playlist>> {
        ops::insert_playlists(&self.collection, inputs).await
    }

    // ============ Read Operations ============

    pub async fn find(&self, query: &Query) -> Result<Cursor<Playlist>> {
        ops::find_playlists(&self.collection, query).await
    }

    pub async fn find_documents(&self, query: &Query) -> Result<Cursor<Document>> {
        ops::find_documents(&self.collection, query).await
    }

    pub async fn find_all(&self, query: &Query) -> Result<Vec<Playlist>> {
        ops::find_all_playlists(&self.collection, query).await
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<Playlist>> {
        ops::find_one_playlist(&self.collection, filter).await
    }

    pub async fn get(&self, id: ObjectId) -> Result<Option<Playlist>> {
        ops::get_playlist(&self.collection, id).await
    }

    pub async fn count(&self, filter: &Filter) -> Result<u64> {
        ops::count_playlists(&self.collection, filter).await
    }

    // ============ Update Operations ============

    pub async fn update_by_id(
        &self,
        id: ObjectId,
        patch: &PlaylistPatch,
        options: &UpdateOptions,
    ) -> Result<Option<Playlist>> {
        ops::update_playlist(&self.collection, id, patch, options).await
    }

    pub async fn update_many(&self, filter: &Filter, patch: &PlaylistPatch) -> Result<u64> {
        ops::update_playlists(&self.collection, filter, patch).await
    }

    // ============ Delete Operations ============

    pub async fn delete_by_id(&self, id: ObjectId) -> Result<bool> {
        ops::delete_playlist(&self.collection, id).await
    }

    pub async fn delete_one(&self, filter: &Filter) -> Result<bool> {
        ops::delete_one_playlist(&self.collection, filter).await
    }
}
