//! Request layer over the registry
//!
//! Each [`Command`] resolves a playlist through the [`Registry`], runs one
//! engine operation and turns the outcome into a [`Response`]. The status
//! codes follow HTTP conventions so the responses can be served as-is.

mod script;

pub use script::{run_script, ScriptSummary};

use crate::error::RegistryError;
use crate::export::{PlaylistSummary, PlaylistView};
use crate::model::{NewSong, Song, SongId};
use crate::registry::{PlaylistId, Registry};
use serde::{Deserialize, Serialize};

/// One request against the registry
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    CreatePlaylist {
        #[serde(default)]
        name: String,
    },
    GetPlaylist {
        playlist_id: PlaylistId,
    },
    AddSong {
        playlist_id: PlaylistId,
        #[serde(flatten)]
        song: NewSong,
    },
    /// A missing `song_id` matches no song
    RemoveSong {
        playlist_id: PlaylistId,
        #[serde(default)]
        song_id: Option<SongId>,
    },
    /// A missing `key` matches no song
    Search {
        playlist_id: PlaylistId,
        #[serde(default)]
        key: Option<String>,
        #[serde(default)]
        search_type: Option<String>,
    },
    Sort {
        playlist_id: PlaylistId,
        #[serde(default)]
        key: Option<String>,
    },
    DeletePlaylist {
        playlist_id: PlaylistId,
    },
    ListPlaylists,
}

/// Reply to a [`Command`]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum Response {
    Created {
        message: String,
        id: PlaylistId,
    },
    Playlist(PlaylistView),
    SongAdded {
        message: String,
        song_id: SongId,
    },
    Results {
        results: Vec<Song>,
    },
    Sorted {
        message: String,
        songs: Vec<Song>,
    },
    Playlists {
        playlists: Vec<PlaylistSummary>,
    },
    Error {
        error: String,
        #[serde(skip)]
        status: u16,
    },
    Done {
        message: String,
    },
}

impl Response {
    fn done(message: &str) -> Self {
        Response::Done {
            message: message.to_string(),
        }
    }

    /// Error reply with an explicit status
    pub fn error(status: u16, error: impl Into<String>) -> Self {
        Response::Error {
            error: error.into(),
            status,
        }
    }

    /// HTTP-style status code
    pub fn status(&self) -> u16 {
        match self {
            Response::Created { .. } | Response::SongAdded { .. } => 201,
            Response::Error { status, .. } => *status,
            _ => 200,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<RegistryError> for Response {
    fn from(err: RegistryError) -> Self {
        let status = if err.is_not_found() { 404 } else { 400 };
        Response::error(status, err.to_string())
    }
}

/// Run one command against the registry
pub fn dispatch(registry: &Registry, command: Command) -> Response {
    log::debug!("Dispatching {:?}", command);

    let result = match command {
        Command::CreatePlaylist { name } => {
            let id = registry.create_playlist(name);
            Ok(Response::Created {
                message: "Playlist created".to_string(),
                id,
            })
        }
        Command::GetPlaylist { playlist_id } => {
            registry.get_playlist(playlist_id).map(Response::Playlist)
        }
        Command::AddSong { playlist_id, song } => {
            registry
                .add_song(playlist_id, song)
                .map(|song_id| Response::SongAdded {
                    message: "Song added to playlist".to_string(),
                    song_id,
                })
        }
        Command::RemoveSong {
            playlist_id,
            song_id,
        } => match song_id {
            Some(song_id) => registry
                .remove_song(playlist_id, song_id)
                .map(|()| Response::done("Song removed from playlist")),
            None => missing(registry, playlist_id, RegistryError::MissingSongId(playlist_id)),
        },
        Command::Search {
            playlist_id,
            key,
            search_type,
        } => match key {
            Some(key) => registry
                .search(playlist_id, &key, search_type.as_deref())
                .map(|results| Response::Results { results }),
            None => missing(registry, playlist_id, RegistryError::NoMatches),
        },
        Command::Sort { playlist_id, key } => {
            registry
                .sort(playlist_id, key.as_deref())
                .map(|sorted| Response::Sorted {
                    message: format!("Playlist sorted by {}", sorted.key),
                    songs: sorted.songs,
                })
        }
        Command::DeletePlaylist { playlist_id } => registry
            .delete_playlist(playlist_id)
            .map(|()| Response::done("Playlist deleted")),
        Command::ListPlaylists => Ok(Response::Playlists {
            playlists: registry.list_playlists(),
        }),
    };

    result.unwrap_or_else(Response::from)
}

/// Outcome of a request whose lookup value was absent: `miss` when the
/// playlist exists, playlist-not-found otherwise
fn missing(
    registry: &Registry,
    playlist_id: PlaylistId,
    miss: RegistryError,
) -> Result<Response, RegistryError> {
    if registry.contains_playlist(playlist_id) {
        Err(miss)
    } else {
        Err(RegistryError::PlaylistNotFound(playlist_id))
    }
}
