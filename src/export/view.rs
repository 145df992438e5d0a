use crate::model::{Playlist, Song};
use crate::registry::PlaylistId;
use serde::{Deserialize, Serialize};

/// Snapshot of a playlist: its name and songs in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistView {
    pub name: String,
    pub songs: Vec<Song>,
}

/// Result of a sort: the key label that was requested and the new order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortedView {
    pub key: String,
    pub songs: Vec<Song>,
}

/// One line of a playlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistSummary {
    pub id: PlaylistId,
    pub name: String,
    pub size: usize,
}

/// Walk a playlist head to tail and copy out its songs
pub fn export_playlist(playlist: &Playlist) -> PlaylistView {
    PlaylistView {
        name: playlist.name().to_string(),
        songs: export_songs(playlist),
    }
}

/// Copy a sequence of song references into owned records
pub fn export_songs<'a>(songs: impl IntoIterator<Item = &'a Song>) -> Vec<Song> {
    songs.into_iter().cloned().collect()
}

/// Serialize any view as JSON, optionally pretty-printed
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
