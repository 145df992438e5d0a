use super::SongField;
use serde::{Deserialize, Serialize};

/// Identifier of a song, unique while the song exists
pub type SongId = u64;

/// A single track's metadata entry within a playlist
///
/// Fields are never changed after the song is inserted. Link state lives
/// in the owning [`Playlist`](super::Playlist), not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique identifier
    pub song_id: SongId,

    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Genre label
    pub genre: String,
}

/// Caller-supplied fields for a song that has no id yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSong {
    pub name: String,
    pub artist: String,
    pub genre: String,
}

impl Song {
    /// Create a song record
    pub fn new(
        song_id: SongId,
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            song_id,
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Value of the chosen text field
    pub fn field(&self, field: SongField) -> &str {
        match field {
            SongField::Name => &self.name,
            SongField::Artist => &self.artist,
            SongField::Genre => &self.genre,
        }
    }
}

impl NewSong {
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            genre: genre.into(),
        }
    }

    /// Attach an id, producing the stored record
    pub fn with_id(self, song_id: SongId) -> Song {
        Song {
            song_id,
            name: self.name,
            artist: self.artist,
            genre: self.genre,
        }
    }
}
