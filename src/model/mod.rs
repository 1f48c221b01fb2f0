//! Data models for the wardrobe application.

mod item;
mod outfit;
mod slot;

pub use item::ClothingItem;
pub use outfit::{GeneratedOutfit, SavedOutfit};
pub use slot::{CATEGORY_LABELS, Slot, UNCATEGORIZED, infer_category};
