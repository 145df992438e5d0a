//! Traversal and export of playlists into serializable views
//!
//! Views are detached snapshots: they own copies of the song records, so
//! they can be serialized after the playlist lock has been released.

mod view;

pub use view::{
    export_playlist, export_songs, render_json, PlaylistSummary, PlaylistView, SortedView,
};
