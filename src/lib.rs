//! Playlist record store
//! Typed CRUD access to a "Playlist" collection in a MongoDB document store

mod client;
mod config;
mod error;
mod models;
mod ops;
mod query;
mod store;

pub use client::StoreClient;
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use models::*;
pub use query::{Filter, Order, Projection, Query, Sort};
pub use store::PlaylistStore;
