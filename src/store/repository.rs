//! Typed persistence for the wardrobe collections.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{ClothingItem, SavedOutfit};
use crate::store::{StorageBackend, StoreError};

/// Storage key for closet items.
pub const ITEMS_KEY: &str = "wardrobe-items";

/// Storage key for saved outfits.
pub const OUTFITS_KEY: &str = "wardrobe-outfits";

/// Storage key for donation-pile item ids.
pub const DONATION_KEY: &str = "wardrobe-donation";

/// Typed repository over the three wardrobe collections.
///
/// Loads are tolerant: a missing key or corrupt payload yields an empty
/// collection with a logged warning, never an error. Saves report backend
/// failures so callers can decide what to tell the user.
#[derive(Debug)]
pub struct WardrobeStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> WardrobeStore<B> {
    /// Create a store over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Consume the store and return the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Load all closet items.
    pub fn load_items(&self) -> Vec<ClothingItem> {
        self.load_collection(ITEMS_KEY)
    }

    /// Load all saved outfits.
    pub fn load_outfits(&self) -> Vec<SavedOutfit> {
        self.load_collection(OUTFITS_KEY)
    }

    /// Load the donation-pile item ids.
    pub fn load_donation(&self) -> Vec<String> {
        self.load_collection(DONATION_KEY)
    }

    /// Persist all closet items.
    pub fn save_items(&mut self, items: &[ClothingItem]) -> Result<(), StoreError> {
        self.save_collection(ITEMS_KEY, items)
    }

    /// Persist all saved outfits.
    pub fn save_outfits(&mut self, outfits: &[SavedOutfit]) -> Result<(), StoreError> {
        self.save_collection(OUTFITS_KEY, outfits)
    }

    /// Persist the donation-pile item ids.
    pub fn save_donation(&mut self, ids: &[String]) -> Result<(), StoreError> {
        self.save_collection(DONATION_KEY, ids)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.backend.read(key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("Ignoring corrupt data under {key:?}: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read {key:?}: {e}");
                Vec::new()
            }
        }
    }

    fn save_collection<T: Serialize>(&mut self, key: &str, values: &[T]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(values)?;
        self.backend.write(key, &json)?;
        log::debug!("Saved {} entries under {key:?}", values.len());
        Ok(())
    }
}
