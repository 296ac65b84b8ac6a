use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Number of trailing digits that make up the minor/patch part of an
/// interface number. Everything before them is the game-type prefix.
pub const VERSION_SUFFIX_WIDTH: usize = 4;

/// The game product lines that publish interface numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameType {
    Retail,
    Classic,
    ClassicEra,
}

/// Map from interface-number prefix to game type.
///
/// Interface numbers are zero-padded so the prefix is stable within a
/// product line: `110205` -> `11` (Retail), `50500` -> `5` (Classic),
/// `11507` -> `1` (Classic Era). Lookup is exact, never substring.
static GAME_TYPE_PREFIXES: Lazy<HashMap<&'static str, GameType>> = Lazy::new(|| {
    HashMap::from([
        ("11", GameType::Retail),
        ("5", GameType::Classic),
        ("1", GameType::ClassicEra),
    ])
});

impl GameType {
    /// The exact cell text used for this game type in the reference wiki table.
    pub fn label(&self) -> &'static str {
        match self {
            GameType::Retail => "Retail",
            GameType::Classic => "Classic",
            GameType::ClassicEra => "Classic Era",
        }
    }

    /// Classify an interface number by its prefix (the string minus its
    /// trailing [`VERSION_SUFFIX_WIDTH`] digits).
    ///
    /// Returns `None` for unmapped prefixes and for strings too short to
    /// carry a prefix at all.
    pub fn from_interface_number(interface_number: &str) -> Option<GameType> {
        if interface_number.len() <= VERSION_SUFFIX_WIDTH
            || !interface_number.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }
        let prefix = &interface_number[..interface_number.len() - VERSION_SUFFIX_WIDTH];
        GAME_TYPE_PREFIXES.get(prefix).copied()
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
