//! Registry of playlists
//!
//! Maps playlist identifiers to [`Playlist`] instances and hands out song
//! identifiers. All counters live on the registry, so two registries never
//! share state. Each playlist sits behind its own lock, held for exactly
//! one engine operation.

pub mod config;

pub use config::RegistryConfig;

use crate::error::{RegistryError, Result};
use crate::export::{export_playlist, export_songs, PlaylistSummary, PlaylistView, SortedView};
use crate::model::{NewSong, Playlist, Song, SongId};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifier of a playlist within one registry
pub type PlaylistId = u64;

type SharedPlaylist = Arc<Mutex<Playlist>>;

/// Owner of all playlists and of the id counters
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,

    /// Playlists indexed by id
    playlists: RwLock<BTreeMap<PlaylistId, SharedPlaylist>>,

    /// Next playlist id; ids are never reused, even after deletion
    next_playlist_id: AtomicU64,

    /// Next song id, shared by all playlists
    next_song_id: AtomicU64,
}

impl Registry {
    /// Create an empty registry
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            playlists: RwLock::new(BTreeMap::new()),
            next_playlist_id: AtomicU64::new(1),
            next_song_id: AtomicU64::new(1),
        }
    }

    /// Create an empty playlist and return its id
    pub fn create_playlist(&self, name: impl Into<String>) -> PlaylistId {
        let name = name.into();
        let id = self.next_playlist_id.fetch_add(1, Ordering::Relaxed);
        log::info!("Creating playlist {} ({:?})", id, name);

        self.playlists
            .write()
            .insert(id, Arc::new(Mutex::new(Playlist::new(name))));
        id
    }

    /// Drop a playlist and every song in it
    pub fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        match self.playlists.write().remove(&id) {
            Some(_) => {
                log::info!("Deleted playlist {}", id);
                Ok(())
            }
            None => Err(RegistryError::PlaylistNotFound(id)),
        }
    }

    /// Snapshot of a playlist's name and songs
    pub fn get_playlist(&self, id: PlaylistId) -> Result<PlaylistView> {
        let playlist = self.playlist(id)?;
        let playlist = playlist.lock();
        Ok(export_playlist(&playlist))
    }

    /// Id, name and size of every playlist, by ascending id
    pub fn list_playlists(&self) -> Vec<PlaylistSummary> {
        self.playlists
            .read()
            .iter()
            .map(|(id, playlist)| {
                let playlist = playlist.lock();
                PlaylistSummary {
                    id: *id,
                    name: playlist.name().to_string(),
                    size: playlist.len(),
                }
            })
            .collect()
    }

    /// Number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.read().len()
    }

    /// Whether a playlist with this id exists
    pub fn contains_playlist(&self, id: PlaylistId) -> bool {
        self.playlists.read().contains_key(&id)
    }

    /// Add a song with a freshly assigned id and return that id
    ///
    /// Fails with [`RegistryError::SongIdsExhausted`] once the counter has
    /// reached `SongId::MAX`; ids are never wrapped around.
    pub fn add_song(&self, id: PlaylistId, song: NewSong) -> Result<SongId> {
        let playlist = self.playlist(id)?;
        let song_id = self
            .next_song_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .map_err(|_| RegistryError::SongIdsExhausted)?;
        self.append(id, &playlist, song.with_id(song_id))?;
        Ok(song_id)
    }

    /// Add a song whose id the caller chose
    ///
    /// Later assigned ids skip past it, so `SongId::MAX` is refused. Whether
    /// a duplicate id within the playlist is rejected depends on
    /// [`RegistryConfig::reject_duplicate_ids`].
    pub fn insert_song(&self, id: PlaylistId, song: Song) -> Result<SongId> {
        let playlist = self.playlist(id)?;
        let song_id = song.song_id;
        let next = song_id
            .checked_add(1)
            .ok_or(RegistryError::SongIdsExhausted)?;
        self.next_song_id.fetch_max(next, Ordering::Relaxed);
        self.append(id, &playlist, song)?;
        Ok(song_id)
    }

    /// Remove a song from a playlist
    pub fn remove_song(&self, id: PlaylistId, song_id: SongId) -> Result<()> {
        let playlist = self.playlist(id)?;
        if playlist.lock().remove_song(song_id) {
            log::info!("Removed song {} from playlist {}", song_id, id);
            Ok(())
        } else {
            Err(RegistryError::SongNotFound {
                playlist_id: id,
                song_id,
            })
        }
    }

    /// Songs whose field equals `key`, in playlist order
    ///
    /// `search_type` defaults to the configured field. An unrecognized type
    /// matches nothing and so reports [`RegistryError::NoMatches`].
    pub fn search(
        &self,
        id: PlaylistId,
        key: &str,
        search_type: Option<&str>,
    ) -> Result<Vec<Song>> {
        let playlist = self.playlist(id)?;
        let playlist = playlist.lock();

        let results = match search_type {
            None => export_songs(playlist.search_song(key, self.config.default_search_field)),
            Some(search_type) => export_songs(playlist.search_song_by(key, search_type)),
        };

        if results.is_empty() {
            return Err(RegistryError::NoMatches);
        }
        Ok(results)
    }

    /// Sort a playlist and return the resulting order
    ///
    /// `key` defaults to the configured field. An unrecognized key leaves
    /// the order unchanged.
    pub fn sort(&self, id: PlaylistId, key: Option<&str>) -> Result<SortedView> {
        let playlist = self.playlist(id)?;
        let mut playlist = playlist.lock();

        let label = key.unwrap_or(self.config.default_sort_field.as_str());
        playlist.sort_playlist_by_with(label, self.config.sort_strategy);

        Ok(SortedView {
            key: label.to_string(),
            songs: export_songs(&*playlist),
        })
    }

    fn playlist(&self, id: PlaylistId) -> Result<SharedPlaylist> {
        self.playlists
            .read()
            .get(&id)
            .cloned()
            .ok_or(RegistryError::PlaylistNotFound(id))
    }

    fn append(&self, id: PlaylistId, playlist: &Mutex<Playlist>, song: Song) -> Result<()> {
        let song_id = song.song_id;
        let mut playlist = playlist.lock();
        if self.config.reject_duplicate_ids {
            playlist.try_add_song(song)?;
        } else {
            playlist.push_back(song);
        }
        log::info!("Added song {} to playlist {}", song_id, id);
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
