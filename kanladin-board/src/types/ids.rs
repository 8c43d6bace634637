//! Identifier newtypes for boards, columns, and cards.
//!
//! Authoritative ids are allocated by the remote store; the client only ever
//! mints *temporary* ids (`temp-{millis}`) for optimistically created
//! entities, which the next full refetch supersedes.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix marking a client-generated placeholder id
pub const TEMP_ID_PREFIX: &str = "temp-";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from an existing string value
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this is a client-generated placeholder id
            pub fn is_temporary(&self) -> bool {
                self.0.starts_with(TEMP_ID_PREFIX)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a board
    BoardId
);

string_id!(
    /// Identifier of a column
    ColumnId
);

string_id!(
    /// Identifier of a card
    CardId
);

impl ColumnId {
    /// Mint a temporary column id, unique against the given id set
    pub fn temporary(taken: &[String]) -> Self {
        Self(unique_temp_id(taken))
    }
}

impl CardId {
    /// Mint a temporary card id, unique against the given id set
    pub fn temporary(taken: &[String]) -> Self {
        Self(unique_temp_id(taken))
    }
}

/// Derive a placeholder id from the creation timestamp.
///
/// Two creations within the same millisecond would collide, so the suffix is
/// bumped until the id is unique within `taken`.
fn unique_temp_id(taken: &[String]) -> String {
    let mut millis = Utc::now().timestamp_millis();
    loop {
        let candidate = format!("{TEMP_ID_PREFIX}{millis}");
        if !taken.iter().any(|id| id == &candidate) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_roundtrip() {
        let id = CardId::from_string("card-7");
        assert_eq!(id.as_str(), "card-7");
        assert_eq!(id.to_string(), "card-7");
        assert!(!id.is_temporary());
    }

    #[test]
    fn test_temporary_id_format() {
        let id = CardId::temporary(&[]);
        assert!(id.is_temporary());
        assert!(id.as_str().strip_prefix(TEMP_ID_PREFIX).unwrap().parse::<i64>().is_ok());
    }

    #[test]
    fn test_temporary_id_unique_within_same_millisecond() {
        let first = ColumnId::temporary(&[]);
        let second = ColumnId::temporary(&[first.as_str().to_string()]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ColumnId::from_string("todo");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"todo\"");
        let back: ColumnId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
