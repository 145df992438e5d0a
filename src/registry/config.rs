//! Registry configuration

use crate::model::{SongField, SortStrategy};

/// Configuration for a [`Registry`](super::Registry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Field searched when a request names no search type
    pub default_search_field: SongField,

    /// Field sorted on when a request names no key
    pub default_sort_field: SongField,

    /// How playlists are reordered
    pub sort_strategy: SortStrategy,

    /// Reject caller-supplied song ids already present in the playlist
    /// (false = trust the caller, as the engine's `add_song` does)
    pub reject_duplicate_ids: bool,
}

impl RegistryConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self {
            default_search_field: SongField::Name,
            default_sort_field: SongField::Name,
            sort_strategy: SortStrategy::Insertion,
            reject_duplicate_ids: true,
        }
    }

    /// Set the default search field
    pub fn with_default_search(mut self, field: SongField) -> Self {
        self.default_search_field = field;
        self
    }

    /// Set the default sort key
    pub fn with_default_sort(mut self, field: SongField) -> Self {
        self.default_sort_field = field;
        self
    }

    /// Set the sort strategy
    pub fn with_sort_strategy(mut self, strategy: SortStrategy) -> Self {
        self.sort_strategy = strategy;
        self
    }

    /// Enable or disable duplicate id rejection
    pub fn with_duplicate_rejection(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
