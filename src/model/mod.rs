//! Playlist data model
//!
//! Song records, the key fields used to search and sort them, and the
//! linked playlist engine that owns their order.

mod field;
mod playlist;
mod song;
mod sort;

pub use field::{SongField, UnknownField};
pub use playlist::{Entries, Handle, Iter, Playlist};
pub use song::{NewSong, Song, SongId};
pub use sort::SortStrategy;
