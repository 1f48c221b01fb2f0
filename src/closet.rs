//! Closet service: item CRUD, search, sorting, donation triage, and
//! saved-outfit management, persisted through a [`WardrobeStore`].

use rand::Rng;

use crate::color::Rgb;
use crate::composer::{OutfitConstraints, compose};
use crate::model::{ClothingItem, GeneratedOutfit, SavedOutfit};
use crate::store::{StorageBackend, StoreError, WardrobeStore};

/// Sort orders for listing closet items.
#[derive(Debug, Clone, PartialEq)]
pub enum SortMode {
    /// Most recently added first.
    Recent,
    /// Case-insensitive by name.
    Alphabetical,
    /// Ascending best-match distance to a target color.
    ByColor(Rgb),
    /// Only items whose category equals the label.
    Category(String),
}

/// The user's closet, backed by a storage backend.
///
/// Mutations persist eagerly: every change writes through to the store
/// before returning.
#[derive(Debug)]
pub struct Closet<B: StorageBackend> {
    store: WardrobeStore<B>,
    items: Vec<ClothingItem>,
    outfits: Vec<SavedOutfit>,
    donation: Vec<String>,
}

impl<B: StorageBackend> Closet<B> {
    /// Open a closet over `backend`, loading any persisted collections.
    pub fn open(backend: B) -> Self {
        let store = WardrobeStore::new(backend);
        let items = store.load_items();
        let outfits = store.load_outfits();
        let donation = store.load_donation();
        log::info!(
            "Opened closet: {} item(s), {} outfit(s), {} marked for donation",
            items.len(),
            outfits.len(),
            donation.len()
        );
        Self {
            store,
            items,
            outfits,
            donation,
        }
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add an item and persist.
    pub fn add_item(&mut self, item: ClothingItem) -> Result<(), StoreError> {
        log::info!("Adding {:?} ({})", item.name, item.category);
        self.items.push(item);
        self.store.save_items(&self.items)
    }

    /// Remove an item by id. Returns whether anything was removed.
    ///
    /// Donation marks and saved outfits referencing the id are left in
    /// place; both tolerate dangling ids.
    pub fn remove_item(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.store.save_items(&self.items)?;
        Ok(true)
    }

    /// Replace the item with the same id. Returns whether it was found.
    pub fn update_item(&mut self, item: ClothingItem) -> Result<bool, StoreError> {
        match self.items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                *existing = item;
                self.store.save_items(&self.items)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every item from the closet.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        log::info!("Clearing closet ({} items)", self.items.len());
        self.items.clear();
        self.store.save_items(&self.items)
    }

    /// Increment an item's wear counter. Returns whether it was found.
    pub fn record_wear(&mut self, id: &str) -> Result<bool, StoreError> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.times_worn += 1;
                self.store.save_items(&self.items)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Case-insensitive substring search over name and category.
    ///
    /// An empty or whitespace query returns everything.
    pub fn search(&self, query: &str) -> Vec<&ClothingItem> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Items arranged according to `mode`.
    pub fn sorted(&self, mode: &SortMode) -> Vec<&ClothingItem> {
        let mut list: Vec<&ClothingItem> = self.items.iter().collect();
        match mode {
            SortMode::Recent => list.reverse(),
            SortMode::Alphabetical => {
                list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            }
            SortMode::ByColor(target) => {
                list.sort_by(|a, b| {
                    a.best_match_distance(*target)
                        .total_cmp(&b.best_match_distance(*target))
                });
            }
            SortMode::Category(label) => {
                list.retain(|item| item.category.eq_ignore_ascii_case(label));
            }
        }
        list
    }

    /// Compose an outfit from the closet's items.
    pub fn compose_outfit<R: Rng>(
        &self,
        constraints: &OutfitConstraints,
        rng: &mut R,
    ) -> GeneratedOutfit {
        compose(&self.items, constraints, rng)
    }

    // Donation pile ------------------------------------------------------

    /// Mark an item for donation. Idempotent; unknown ids return false.
    pub fn mark_for_donation(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        if self.donation.iter().any(|marked| marked == id) {
            return Ok(true);
        }
        self.donation.push(id.to_string());
        self.store.save_donation(&self.donation)?;
        Ok(true)
    }

    /// Take an item back out of the donation pile.
    pub fn restore(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.donation.len();
        self.donation.retain(|marked| marked != id);
        if self.donation.len() == before {
            return Ok(false);
        }
        self.store.save_donation(&self.donation)?;
        Ok(true)
    }

    /// Items currently marked for donation; dangling ids are skipped.
    pub fn donation_items(&self) -> Vec<&ClothingItem> {
        self.donation.iter().filter_map(|id| self.get(id)).collect()
    }

    /// Items not marked for donation.
    pub fn active_items(&self) -> Vec<&ClothingItem> {
        self.items
            .iter()
            .filter(|item| !self.donation.iter().any(|marked| marked == &item.id))
            .collect()
    }

    // Saved outfits ------------------------------------------------------

    /// All saved outfits.
    pub fn outfits(&self) -> &[SavedOutfit] {
        &self.outfits
    }

    /// Save a named outfit and return its id.
    ///
    /// An empty name or empty item list is rejected as `Ok(None)`.
    pub fn save_outfit(
        &mut self,
        name: &str,
        category: &str,
        item_ids: Vec<String>,
        palette: Vec<Rgb>,
    ) -> Result<Option<String>, StoreError> {
        if name.trim().is_empty() || item_ids.is_empty() {
            log::debug!("Refusing to save an outfit without a name or items");
            return Ok(None);
        }
        let outfit = SavedOutfit::new(name.trim(), category, item_ids, palette);
        let id = outfit.id.clone();
        self.outfits.push(outfit);
        self.store.save_outfits(&self.outfits)?;
        Ok(Some(id))
    }

    /// Delete a saved outfit by id. Returns whether anything was removed.
    pub fn delete_outfit(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.outfits.len();
        self.outfits.retain(|outfit| outfit.id != id);
        if self.outfits.len() == before {
            return Ok(false);
        }
        self.store.save_outfits(&self.outfits)?;
        Ok(true)
    }

    /// Resolve a saved outfit's members; missing items yield `None`.
    pub fn resolve_outfit(&self, outfit: &SavedOutfit) -> Vec<Option<&ClothingItem>> {
        outfit.resolve(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use crate::store::MemoryBackend;

    use super::*;

    fn closet() -> Closet<MemoryBackend> {
        Closet::open(MemoryBackend::new())
    }

    fn item(name: &str, category: &str, color: &str) -> ClothingItem {
        ClothingItem::new(name, category, color.parse().unwrap())
    }

    #[test]
    fn test_add_and_get() {
        let mut closet = closet();
        let shirt = item("blue shirt", "shirt", "#1E3A8A");
        let id = shirt.id.clone();
        closet.add_item(shirt).unwrap();
        assert_eq!(closet.items().len(), 1);
        assert_eq!(closet.get(&id).map(|i| i.name.as_str()), Some("blue shirt"));
    }

    #[test]
    fn test_persists_across_reopen() {
        let mut closet = closet();
        closet.add_item(item("jeans", "jeans", "#27408B")).unwrap();
        let id = closet.items()[0].id.clone();
        closet.mark_for_donation(&id).unwrap();

        let backend = closet.store.into_backend();
        let reopened = Closet::open(backend);
        assert_eq!(reopened.items().len(), 1);
        assert_eq!(reopened.donation_items().len(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut closet = closet();
        let shirt = item("shirt", "shirt", "#111111");
        let id = shirt.id.clone();
        closet.add_item(shirt).unwrap();
        assert!(closet.remove_item(&id).unwrap());
        assert!(!closet.remove_item(&id).unwrap());
        assert!(closet.items().is_empty());
    }

    #[test]
    fn test_update_item() {
        let mut closet = closet();
        let mut shirt = item("shirt", "shirt", "#111111");
        closet.add_item(shirt.clone()).unwrap();
        shirt.name = "favorite shirt".to_string();
        assert!(closet.update_item(shirt.clone()).unwrap());
        assert_eq!(closet.get(&shirt.id).map(|i| i.name.as_str()), Some("favorite shirt"));

        let stranger = item("stranger", "shirt", "#222222");
        assert!(!closet.update_item(stranger).unwrap());
    }

    #[test]
    fn test_clear_empties_items() {
        let mut closet = closet();
        closet.add_item(item("a", "shirt", "#111111")).unwrap();
        closet.add_item(item("b", "jeans", "#222222")).unwrap();
        closet.clear().unwrap();
        assert!(closet.items().is_empty());
    }

    #[test]
    fn test_record_wear() {
        let mut closet = closet();
        let shirt = item("shirt", "shirt", "#111111");
        let id = shirt.id.clone();
        closet.add_item(shirt).unwrap();
        closet.record_wear(&id).unwrap();
        closet.record_wear(&id).unwrap();
        assert_eq!(closet.get(&id).map(|i| i.times_worn), Some(2));
        assert!(!closet.record_wear("missing").unwrap());
    }

    #[test]
    fn test_search_matches_name_and_category() {
        let mut closet = closet();
        closet.add_item(item("Blue Oxford", "shirt", "#1E3A8A")).unwrap();
        closet.add_item(item("Raw Denim", "jeans", "#27408B")).unwrap();

        assert_eq!(closet.search("oxford").len(), 1);
        assert_eq!(closet.search("JEANS").len(), 1);
        assert_eq!(closet.search("  ").len(), 2);
        assert!(closet.search("velvet").is_empty());
    }

    #[test]
    fn test_sorted_recent_reverses_insertion() {
        let mut closet = closet();
        closet.add_item(item("first", "shirt", "#111111")).unwrap();
        closet.add_item(item("second", "jeans", "#222222")).unwrap();
        let recent = closet.sorted(&SortMode::Recent);
        assert_eq!(recent[0].name, "second");
        assert_eq!(recent[1].name, "first");
    }

    #[test]
    fn test_sorted_alphabetical_ignores_case() {
        let mut closet = closet();
        closet.add_item(item("zip hoodie", "hoodie", "#111111")).unwrap();
        closet.add_item(item("Anorak", "jacket", "#222222")).unwrap();
        let sorted = closet.sorted(&SortMode::Alphabetical);
        assert_eq!(sorted[0].name, "Anorak");
    }

    #[test]
    fn test_sorted_by_color_is_nondecreasing() {
        let mut closet = closet();
        closet.add_item(item("red", "shirt", "#FF0000")).unwrap();
        closet.add_item(item("blue", "shirt", "#0000FF")).unwrap();
        closet.add_item(item("dark red", "shirt", "#990000")).unwrap();

        let target = Rgb::new(255, 0, 0);
        let sorted = closet.sorted(&SortMode::ByColor(target));
        let distances: Vec<f64> = sorted
            .iter()
            .map(|item| item.best_match_distance(target))
            .collect();
        assert!(distances.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(sorted[0].name, "red");
    }

    #[test]
    fn test_sorted_category_filters() {
        let mut closet = closet();
        closet.add_item(item("a", "shirt", "#111111")).unwrap();
        closet.add_item(item("b", "jeans", "#222222")).unwrap();
        let filtered = closet.sorted(&SortMode::Category("Shirt".to_string()));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "a");
    }

    #[test]
    fn test_donation_mark_restore() {
        let mut closet = closet();
        let shirt = item("shirt", "shirt", "#111111");
        let id = shirt.id.clone();
        closet.add_item(shirt).unwrap();

        assert!(closet.mark_for_donation(&id).unwrap());
        assert!(closet.mark_for_donation(&id).unwrap());
        assert_eq!(closet.donation_items().len(), 1);
        assert_eq!(closet.active_items().len(), 0);

        assert!(closet.restore(&id).unwrap());
        assert!(!closet.restore(&id).unwrap());
        assert_eq!(closet.active_items().len(), 1);
    }

    #[test]
    fn test_donation_rejects_unknown_id() {
        let mut closet = closet();
        assert!(!closet.mark_for_donation("nope").unwrap());
    }

    #[test]
    fn test_donation_skips_dangling_ids() {
        let mut closet = closet();
        let shirt = item("shirt", "shirt", "#111111");
        let id = shirt.id.clone();
        closet.add_item(shirt).unwrap();
        closet.mark_for_donation(&id).unwrap();
        closet.remove_item(&id).unwrap();
        assert!(closet.donation_items().is_empty());
    }

    #[test]
    fn test_save_outfit_requires_name_and_items() {
        let mut closet = closet();
        assert_eq!(closet.save_outfit("", "", vec!["a".to_string()], vec![]).unwrap(), None);
        assert_eq!(closet.save_outfit("look", "", vec![], vec![]).unwrap(), None);

        let id = closet
            .save_outfit("look", "casual", vec!["a".to_string()], vec![])
            .unwrap();
        assert!(id.is_some());
        assert_eq!(closet.outfits().len(), 1);
    }

    #[test]
    fn test_delete_outfit() {
        let mut closet = closet();
        let id = closet
            .save_outfit("look", "", vec!["a".to_string()], vec![])
            .unwrap()
            .unwrap();
        assert!(closet.delete_outfit(&id).unwrap());
        assert!(!closet.delete_outfit(&id).unwrap());
        assert!(closet.outfits().is_empty());
    }

    #[test]
    fn test_resolve_outfit_marks_missing() {
        let mut closet = closet();
        let shirt = item("shirt", "shirt", "#111111");
        let shirt_id = shirt.id.clone();
        closet.add_item(shirt).unwrap();
        let outfit_id = closet
            .save_outfit("look", "", vec![shirt_id, "gone".to_string()], vec![])
            .unwrap()
            .unwrap();

        let outfit = closet
            .outfits()
            .iter()
            .find(|o| o.id == outfit_id)
            .cloned()
            .unwrap();
        let resolved = closet.resolve_outfit(&outfit);
        assert!(resolved[0].is_some());
        assert!(resolved[1].is_none());
    }
}
