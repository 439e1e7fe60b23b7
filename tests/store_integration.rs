//! Live-store integration tests
//!
//! These need a reachable MongoDB instance (mongodb://localhost:27017 by
//! default, override with PLAYLIST_STORE_URI) and are ignored by default:
//! run them with `cargo test -- --ignored`

use anyhow::Result;
use bson::oid::ObjectId;
use futures_util::TryStreamExt;
use playlist_store::{
    Error, Filter, NewPlaylist, PlaylistPatch, PlaylistStore, Projection, Query, Sort, StoreClient,
    StoreConfig, UpdateOptions,
};

async fn connect() -> Result<StoreClient> {
    let _ = tracing_subscriber::fmt::try_init();
    let config = StoreConfig::from_env("playlist_store_tests");
    Ok(StoreClient::connect(&config).await?)
}

/// Unique author tag so concurrent test runs never see each other's records
fn tag() -> String {
    format!("test-{}", ObjectId::new().to_hex())
}

fn tagged(name: &str, videos: i64, author: &str) -> NewPlaylist {
    NewPlaylist {
        video_count: Some(videos),
        author: Some(author.to_string()),
        ..NewPlaylist::named(name)
    }
}

async fn cleanup(store: &PlaylistStore, author: &str) -> Result<()> {
    while store.delete_one(&Filter::eq("author", author)).await? {}
    Ok(())
}

#[tokio::test]
#[ignore]
async fn insert_assigns_identity_and_creation_time() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    let stored = store.insert_one(tagged("React JS", 80, &author)).await?;
    assert!(!stored.id.to_hex().is_empty());

    // the stored record reads back field for field
    let read_back = store.get(stored.id).await?.expect("record should exist");
    assert_eq!(read_back, stored);
    assert_eq!(read_back.name, "React JS");
    assert_eq!(read_back.video_count, Some(80));
    assert!(read_back.created_at_utc().timestamp() > 0);

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn insert_without_name_fails_validation() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();

    let result = store.insert_one(NewPlaylist::named("")).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn insert_many_is_all_or_nothing() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    let batch = vec![
        tagged("Express JS", 50, &author),
        tagged("", 10, &author),
        tagged("MongoDB", 10, &author),
    ];
    let result = store.insert_many(batch).await;
    assert!(matches!(result, Err(Error::Validation(_))));

    // the invalid batch wrote nothing
    assert_eq!(store.count(&Filter::eq("author", author.as_str())).await?, 0);

    let stored = store
        .insert_many(vec![
            tagged("Express JS", 50, &author),
            tagged("MongoDB", 10, &author),
        ])
        .await?;
    assert_eq!(stored.len(), 2);
    assert_eq!(store.count(&Filter::eq("author", author.as_str())).await?, 2);

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn count_matches_find_length() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    store
        .insert_many(vec![
            tagged("Express JS", 50, &author),
            tagged("MongoDB", 10, &author),
            tagged("Mongoose JS", 5, &author),
        ])
        .await?;

    for filter in [
        Filter::eq("author", author.as_str()),
        Filter::and([Filter::eq("author", author.as_str()), Filter::gte("videoCount", 10)]),
        Filter::and([Filter::eq("author", author.as_str()), Filter::eq("videoCount", -1)]),
    ] {
        let count = store.count(&filter).await?;
        let found = store.find_all(&Query::new().filter(filter)).await?;
        assert_eq!(count as usize, found.len());
    }

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn update_by_id_changes_exactly_one_field() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    let stored = store.insert_one(tagged("Node JS", 50, &author)).await?;

    let updated = store
        .update_by_id(
            stored.id,
            &PlaylistPatch::rename("React JS"),
            &UpdateOptions {
                return_updated: true,
                projection: None,
            },
        )
        .await?
        .expect("record should exist");

    assert_eq!(updated.name, "React JS");
    // everything else is untouched
    assert_eq!(updated.id, stored.id);
    assert_eq!(updated.video_count, stored.video_count);
    assert_eq!(updated.author, stored.author);
    assert_eq!(updated.active, stored.active);
    assert_eq!(updated.created_at, stored.created_at);

    // default options return the prior image
    let prior = store
        .update_by_id(
            stored.id,
            &PlaylistPatch::rename("Vue JS"),
            &UpdateOptions::default(),
        )
        .await?
        .expect("record should exist");
    assert_eq!(prior.name, "React JS");

    // unknown id is a no-op, not an error
    let missing = store
        .update_by_id(
            ObjectId::new(),
            &PlaylistPatch::rename("Angular"),
            &UpdateOptions::default(),
        )
        .await?;
    assert!(missing.is_none());

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn update_many_reports_modified_count() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    store
        .insert_many(vec![
            tagged("Express JS", 50, &author),
            tagged("MongoDB", 10, &author),
        ])
        .await?;

    let patch = PlaylistPatch {
        active: Some(false),
        ..PlaylistPatch::default()
    };
    let modified = store
        .update_many(&Filter::eq("author", author.as_str()), &patch)
        .await?;
    assert_eq!(modified, 2);

    let inactive = Filter::and([Filter::eq("author", author.as_str()), Filter::eq("active", false)]);
    assert_eq!(store.count(&inactive).await?, 2);

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn delete_missing_record_reports_nothing_removed() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();

    assert!(!store.delete_by_id(ObjectId::new()).await?);

    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn delete_by_id_removes_the_record() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    let stored = store.insert_one(tagged("Mongoose JS", 5, &author)).await?;
    assert!(store.delete_by_id(stored.id).await?);
    assert!(store.get(stored.id).await?.is_none());
    // second delete finds nothing
    assert!(!store.delete_by_id(stored.id).await?);

    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn sort_descending_reverses_ascending() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    store
        .insert_many(vec![
            tagged("Express JS", 50, &author),
            tagged("MongoDB", 10, &author),
            tagged("React JS", 80, &author),
        ])
        .await?;

    let base = Query::new().filter(Filter::eq("author", author.as_str()));
    let ascending = store
        .find_all(&base.clone().sort(Sort::asc("videoCount")))
        .await?;
    let descending = store
        .find_all(&base.sort(Sort::desc("videoCount")))
        .await?;

    let mut reversed = descending.clone();
    reversed.reverse();
    assert_eq!(ascending, reversed);
    let counts: Vec<_> = ascending.iter().map(|p| p.video_count).collect();
    assert_eq!(counts, [Some(10), Some(50), Some(80)]);

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn projection_trims_returned_fields() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    store.insert_one(tagged("Express JS", 50, &author)).await?;

    let query = Query::new()
        .filter(Filter::eq("author", author.as_str()))
        .select(Projection::include(["name", "videoCount"]));
    let docs: Vec<_> = store.find_documents(&query).await?.try_collect().await?;

    assert_eq!(docs.len(), 1);
    let doc = &docs[0];
    assert_eq!(doc.get_str("name").unwrap(), "Express JS");
    assert_eq!(doc.get_i64("videoCount").unwrap(), 50);
    assert!(doc.contains_key("_id"));
    // projected-out fields are absent
    assert!(!doc.contains_key("author"));
    assert!(!doc.contains_key("createdAt"));

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}

#[tokio::test]
#[ignore]
async fn two_record_scenario_sorts_and_counts() -> Result<()> {
    let client = connect().await?;
    let store = client.playlists();
    let author = tag();

    store
        .insert_many(vec![tagged("A", 80, &author), tagged("B", 10, &author)])
        .await?;

    let sorted = store
        .find_all(
            &Query::new()
                .filter(Filter::eq("author", author.as_str()))
                .sort(Sort::asc("videoCount")),
        )
        .await?;
    let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["B", "A"]);

    let big = Filter::and([Filter::eq("author", author.as_str()), Filter::gte("videoCount", 50)]);
    assert_eq!(store.count(&big).await?, 1);

    cleanup(&store, &author).await?;
    client.close().await;
    Ok(())
}
