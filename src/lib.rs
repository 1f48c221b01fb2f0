//! Wardrobe - closet management core
//!
//! Catalogs clothing items, extracts dominant colors from item photos, and
//! assembles weather- and palette-aware outfits from the cataloged closet.

pub mod closet;
pub mod color;
pub mod composer;
pub mod config;
pub mod intake;
pub mod model;
pub mod quiz;
pub mod store;
pub mod weather;

pub use closet::{Closet, SortMode};
pub use color::Rgb;
pub use composer::{OutfitConstraints, compose};
pub use model::{ClothingItem, GeneratedOutfit, SavedOutfit, Slot};
pub use weather::WeatherCondition;
