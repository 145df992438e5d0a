//! Playlist Engine - named playlists of songs in a linked order
//!
//! The core is [`model::Playlist`], a doubly-linked sequence of songs with
//! add, remove, search and sort. [`registry::Registry`] owns the playlists
//! and id counters, and [`command`] exposes them as JSON requests.

pub mod command;
pub mod error;
pub mod export;
pub mod model;
pub mod registry;

pub use error::{PlaylistError, RegistryError};
pub use model::{NewSong, Playlist, Song, SongField, SongId, SortStrategy};
pub use registry::{PlaylistId, Registry, RegistryConfig};
