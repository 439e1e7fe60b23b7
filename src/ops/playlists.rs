//! Playlist CRUD operations

use bson::oid::ObjectId;
use bson::{Document, doc};
use futures_util::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Cursor};

use crate::error::Result;
use crate::models::{NewPlaylist, Playlist, PlaylistPatch, UpdateOptions};
use crate::query::{Filter, Projection, Query};

/// Insert a single record, returns the stored record
pub async fn insert_playlist(coll: &Collection<Playlist>, input: NewPlaylist) -> Result<Playlist> {
    input.validate()?;
    let record = input.into_record();
    coll.insert_one(&record).await?;
    Ok(record)
}

/// Insert a batch of records, all-or-nothing: every input is validated
/// before anything is written
pub async fn insert_playlists(
    coll: &Collection<Playlist>,
    inputs: Vec<NewPlaylist>,
) -> Result<Vec<Playlist>> {
    for input in &inputs {
        input.validate()?;
    }
    let records: Vec<Playlist> = inputs.into_iter().map(NewPlaylist::into_record).collect();
    if records.is_empty() {
        return Ok(records);
    }
    coll.insert_many(&records).await?;
    tracing::debug!("inserted {} playlist records", records.len());
    Ok(records)
}

/// Run a find, returns a lazy cursor over matching records
///
/// Re-running the same query re-executes it against the store. A projection
/// that drops `name` or `createdAt` makes records undecodable as `Playlist`;
/// route such queries through `find_documents` instead
pub async fn find_playlists(
    coll: &Collection<Playlist>,
    query: &Query,
) -> Result<Cursor<Playlist>> {
    let cursor = coll
        .find(query.filter_document())
        .with_options(query.to_find_options())
        .await?;
    Ok(cursor)
}

/// Same find, decoded as raw documents (for narrow projections)
pub async fn find_documents(
    coll: &Collection<Playlist>,
    query: &Query,
) -> Result<Cursor<Document>> {
    let cursor = coll
        .clone_with_type::<Document>()
        .find(query.filter_document())
        .with_options(query.to_find_options())
        .await?;
    Ok(cursor)
}

/// Eagerly collect the records matching a query
pub async fn find_all_playlists(
    coll: &Collection<Playlist>,
    query: &Query,
) -> Result<Vec<Playlist>> {
    let cursor = find_playlists(coll, query).await?;
    Ok(cursor.try_collect().await?)
}

/// First matching record, if any
pub async fn find_one_playlist(
    coll: &Collection<Playlist>,
    filter: &Filter,
) -> Result<Option<Playlist>> {
    Ok(coll.find_one(filter.to_document()).await?)
}

/// Get record by id
pub async fn get_playlist(coll: &Collection<Playlist>, id: ObjectId) -> Result<Option<Playlist>> {
    Ok(coll.find_one(doc! { "_id": id }).await?)
}

/// Count records matching a filter
pub async fn count_playlists(coll: &Collection<Playlist>, filter: &Filter) -> Result<u64> {
    Ok(coll.count_documents(filter.to_document()).await?)
}

/// Apply a field-subset update by id
///
/// Returns the prior record, or the updated one when `return_updated` is
/// set; None when the id does not exist
pub async fn update_playlist(
    coll: &Collection<Playlist>,
    id: ObjectId,
    patch: &PlaylistPatch,
    options: &UpdateOptions,
) -> Result<Option<Playlist>> {
    patch.validate()?;

    let mut driver_options = FindOneAndUpdateOptions::default();
    driver_options.return_document = Some(if options.return_updated {
        ReturnDocument::After
    } else {
        ReturnDocument::Before
    });
    driver_options.projection = options.projection.as_ref().map(Projection::to_document);

    let record = coll
        .find_one_and_update(doc! { "_id": id }, patch.to_update_document())
        .with_options(driver_options)
        .await?;
    Ok(record)
}

/// Apply a field-subset update to every matching record, returns the
/// modified count
pub async fn update_playlists(
    coll: &Collection<Playlist>,
    filter: &Filter,
    patch: &PlaylistPatch,
) -> Result<u64> {
    patch.validate()?;
    let result = coll
        .update_many(filter.to_document(), patch.to_update_document())
        .await?;
    Ok(result.modified_count)
}

/// Delete record by id, returns whether a record was removed
pub async fn delete_playlist(coll: &Collection<Playlist>, id: ObjectId) -> Result<bool> {
    let result = coll.delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count > 0)
}

/// Delete the first record matching a filter, returns whether a record was
/// removed
pub async fn delete_one_playlist(coll: &Collection<Playlist>, filter: &Filter) -> Result<bool> {
    let result = coll.delete_one(filter.to_document()).await?;
    Ok(result.deleted_count > 0)
}
