//! Sort strategies for reordering a playlist

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How [`Playlist::sort_playlist_with`](super::Playlist::sort_playlist_with)
/// rebuilds the order
///
/// Both strategies produce the same order: ascending on the chosen field,
/// with songs of equal value kept in their previous relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Repeated sorted insertion into a fresh chain, O(n^2)
    #[default]
    Insertion,

    /// Collect handles, stable merge sort, relink, O(n log n)
    Merge,
}

impl SortStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Insertion => "insertion",
            SortStrategy::Merge => "merge",
        }
    }
}

impl FromStr for SortStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insertion" => Ok(SortStrategy::Insertion),
            "merge" => Ok(SortStrategy::Merge),
            other => Err(format!(
                "unknown sort strategy {:?} (expected \"insertion\" or \"merge\")",
                other
            )),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
