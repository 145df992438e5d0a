use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Song field used as a search or sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongField {
    #[default]
    Name,
    Artist,
    Genre,
}

/// Returned when a key string is not one of `name`, `artist`, `genre`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown song field: {0:?}")]
pub struct UnknownField(pub String);

impl SongField {
    pub const ALL: [SongField; 3] = [SongField::Name, SongField::Artist, SongField::Genre];

    /// Lowercase label, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            SongField::Name => "name",
            SongField::Artist => "artist",
            SongField::Genre => "genre",
        }
    }
}

impl FromStr for SongField {
    type Err = UnknownField;

    // Exact match only; "Name" is not "name".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SongField::Name),
            "artist" => Ok(SongField::Artist),
            "genre" => Ok(SongField::Genre),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

impl fmt::Display for SongField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
