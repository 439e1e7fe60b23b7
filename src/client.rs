//! Store client - connection lifecycle
//! Owns the driver client and hands out typed collection handles

use bson::doc;
use mongodb::{Client, Database};
use tracing::{error, info};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::Playlist;
use crate::store::PlaylistStore;

/// Logical collection holding playlist records
const PLAYLIST_COLLECTION: &str = "Playlist";

/// Connected handle to the document store
///
/// Construct one at startup and pass it to whatever needs store access;
/// clones share the driver's connection pool
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    database: Database,
}

impl StoreClient {
    /// Connect to the store and verify the connection
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        let database = client.database(&config.database);

        // The driver connects lazily; ping so failures surface here
        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => info!(
                "Connected to MongoDB at {} (database {})",
                config.uri, config.database
            ),
            Err(err) => {
                error!("Could not connect to MongoDB at {}: {err}", config.uri);
                return Err(err.into());
            }
        }

        Ok(Self { client, database })
    }

    /// Typed store over the playlist collection
    pub fn playlists(&self) -> PlaylistStore {
        PlaylistStore::new(self.database.collection::<Playlist>(PLAYLIST_COLLECTION))
    }

    /// Shut down the driver and release its connections
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
