//! Store operations organized by entity type

mod playlists;

pub use playlists::*;
