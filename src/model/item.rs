//! Clothing item records.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::color::{Rgb, distance};
use crate::model::Slot;

/// A single piece of clothing in the closet.
///
/// Serialized field names keep the persisted layout of earlier releases
/// (`season`, `occasion`, `imageUrl`), so existing exports load unchanged.
/// Stored color strings that fail to parse degrade to defaults instead
/// of failing the whole closet load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    /// Unique identifier (UUID v4, assigned at creation).
    pub id: String,

    /// Display name, usually derived from the source filename.
    pub name: String,

    /// Category label, matched case-insensitively against slot sets.
    pub category: String,

    /// Primary color extracted from the item's photo.
    #[serde(default = "default_color", deserialize_with = "color_or_white")]
    pub color: Rgb,

    /// Second dominant color, when the photo has a distinct one.
    #[serde(
        default,
        deserialize_with = "optional_color",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_color: Option<Rgb>,

    /// Seasons this item suits.
    #[serde(default, rename = "season")]
    pub seasons: Vec<String>,

    /// Occasions this item suits.
    #[serde(default, rename = "occasion")]
    pub occasions: Vec<String>,

    /// Path or data reference to the source image.
    #[serde(default, rename = "imageUrl")]
    pub image_ref: String,

    /// Number of times the item has been worn.
    #[serde(default)]
    pub times_worn: u32,
}

fn default_color() -> Rgb {
    Rgb::WHITE
}

/// Deserialize a color string, degrading unparseable values to white.
fn color_or_white<'de, D>(deserializer: D) -> Result<Rgb, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.parse() {
        Ok(color) => Ok(color),
        Err(e) => {
            log::warn!("Ignoring unparseable item color {raw:?}: {e}");
            Ok(Rgb::WHITE)
        }
    }
}

/// Deserialize an optional color string, degrading unparseable values to
/// `None`.
fn optional_color<'de, D>(deserializer: D) -> Result<Option<Rgb>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse() {
        Ok(color) => Some(color),
        Err(e) => {
            log::warn!("Ignoring unparseable secondary color {s:?}: {e}");
            None
        }
    }))
}

impl ClothingItem {
    /// Create a new item with a fresh id and empty tag lists.
    pub fn new(name: impl Into<String>, category: impl Into<String>, color: Rgb) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            color,
            secondary_color: None,
            seasons: Vec::new(),
            occasions: Vec::new(),
            image_ref: String::new(),
            times_worn: 0,
        }
    }

    /// Set the secondary color.
    pub fn with_secondary_color(mut self, color: Rgb) -> Self {
        self.secondary_color = Some(color);
        self
    }

    /// Set the seasons list.
    pub fn with_seasons(mut self, seasons: Vec<String>) -> Self {
        self.seasons = seasons;
        self
    }

    /// Set the occasions list.
    pub fn with_occasions(mut self, occasions: Vec<String>) -> Self {
        self.occasions = occasions;
        self
    }

    /// Set the image reference.
    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// The outfit slot this item's category maps to, if any.
    pub fn slot(&self) -> Option<Slot> {
        Slot::for_category(&self.category)
    }

    /// Distance from `target` to whichever of this item's colors is closer.
    pub fn best_match_distance(&self, target: Rgb) -> f64 {
        let primary = distance(self.color, target);
        match self.secondary_color {
            Some(secondary) => primary.min(distance(secondary, target)),
            None => primary,
        }
    }
}
