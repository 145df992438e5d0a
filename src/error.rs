//! Error types for the playlist engine and registry
//!
//! Absence is not an error inside the engine: a missing song is `false`
//! and an empty search is an empty `Vec`. The registry turns those into
//! [`RegistryError`] values for its callers.

use crate::model::SongId;
use crate::registry::PlaylistId;
use thiserror::Error;

/// Errors raised by [`Playlist`](crate::model::Playlist) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("song id {0} is already in this playlist")]
    DuplicateSongId(SongId),
}

/// Errors raised by [`Registry`](crate::registry::Registry) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Playlist not found")]
    PlaylistNotFound(PlaylistId),

    #[error("Song not found in playlist")]
    SongNotFound {
        playlist_id: PlaylistId,
        song_id: SongId,
    },

    #[error("Song not found in playlist")]
    MissingSongId(PlaylistId),

    #[error("No songs found matching the search criteria")]
    NoMatches,

    #[error("Song id space exhausted")]
    SongIdsExhausted,

    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

impl RegistryError {
    /// Whether the error means something the caller asked for does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::PlaylistNotFound(_)
                | RegistryError::SongNotFound { .. }
                | RegistryError::MissingSongId(_)
                | RegistryError::NoMatches
        )
    }
}

/// Convenience result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
