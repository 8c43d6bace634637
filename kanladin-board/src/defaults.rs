//! Built-in titles for newly created entities.
//!
//! The remote store is the source of truth for everything else; these are
//! only the placeholders the client uses for optimistic creation and for a
//! board whose title has not arrived yet.

/// Title given to a freshly created card
pub const DEFAULT_CARD_TITLE: &str = "New Card";

/// Title given to a freshly created column
pub const DEFAULT_COLUMN_TITLE: &str = "New Column";

/// Board title shown while the remote has not provided one
pub const FALLBACK_BOARD_TITLE: &str = "Kanladin Project Board";
