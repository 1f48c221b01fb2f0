//! Generated and saved outfit records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Rgb;
use crate::model::ClothingItem;

/// An outfit produced by the composer.
///
/// Holds member ids in slot order and the palette derived from member
/// colors: primaries first, then secondaries, deduplicated in first-seen
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutfit {
    /// Member item ids, at most one per slot.
    #[serde(rename = "items")]
    pub item_ids: Vec<String>,

    /// Deduplicated member colors.
    #[serde(default)]
    pub palette: Vec<Rgb>,
}

impl GeneratedOutfit {
    /// Build an outfit from picked items, deriving the palette.
    pub fn from_items(items: &[&ClothingItem]) -> Self {
        let item_ids = items.iter().map(|item| item.id.clone()).collect();

        let mut palette = Vec::new();
        for item in items {
            push_unique(&mut palette, item.color);
        }
        for item in items {
            if let Some(secondary) = item.secondary_color {
                push_unique(&mut palette, secondary);
            }
        }

        Self { item_ids, palette }
    }

    /// Number of items in the outfit.
    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    /// Whether the outfit has no items.
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}

fn push_unique(palette: &mut Vec<Rgb>, color: Rgb) {
    if !palette.contains(&color) {
        palette.push(color);
    }
}

/// A named outfit persisted to the store.
///
/// Member references are weak: items may be removed from the closet after
/// an outfit is saved, so resolution yields placeholders for missing ids
/// rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedOutfit {
    /// Unique identifier (UUID v4, assigned at creation).
    pub id: String,

    /// User-chosen display name.
    pub name: String,

    /// User-chosen grouping label (casual, formal, and so on).
    #[serde(default)]
    pub category: String,

    /// Member item ids, in the order they were added.
    #[serde(rename = "items")]
    pub item_ids: Vec<String>,

    /// Palette captured when the outfit was saved.
    #[serde(default)]
    pub palette: Vec<Rgb>,
}

impl SavedOutfit {
    /// Create a saved outfit with a fresh id.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        item_ids: Vec<String>,
        palette: Vec<Rgb>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            item_ids,
            palette,
        }
    }

    /// Resolve member ids against the closet.
    ///
    /// Missing items yield `None` in their position so callers can render
    /// a placeholder.
    pub fn resolve<'a>(&self, items: &'a [ClothingItem]) -> Vec<Option<&'a ClothingItem>> {
        self.item_ids
            .iter()
            .map(|id| items.iter().find(|item| &item.id == id))
            .collect()
    }
}
