//! Territory records.

use serde::Serialize;

/// Maximum visible characters kept from a territory name.
pub const NAME_MAX_CHARS: usize = 29;

/// Maximum visible characters kept from an owner color.
pub const COLOR_MAX_CHARS: usize = 9;

/// A named region held by one army.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Territory {
    /// Display name, at most [`NAME_MAX_CHARS`] characters.
    pub name: String,
    /// Color of the army holding this territory, at most [`COLOR_MAX_CHARS`] characters.
    pub owner_color: String,
    /// Troops stationed here. At least 1 for every registered territory.
    pub troops: u32,
}

impl Territory {
    /// Create a territory, clamping `name` and `owner_color` to their field widths.
    ///
    /// Troop validation is the registry's job; this only shapes the text.
    #[must_use]
    pub fn new(name: &str, owner_color: &str, troops: u32) -> Self {
        Self {
            name: clamp_chars(name, NAME_MAX_CHARS),
            owner_color: clamp_chars(owner_color, COLOR_MAX_CHARS),
            troops,
        }
    }

    /// Whether this territory can launch an attack (one troop must stay behind).
    #[must_use]
    pub const fn can_attack(&self) -> bool {
        self.troops >= 2
    }

    /// Whether both territories are held by the same army.
    #[must_use]
    pub fn is_allied_with(&self, other: &Territory) -> bool {
        self.owner_color == other.owner_color
    }
}

/// Keep at most `max` characters of `text`, never splitting a character.
fn clamp_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
