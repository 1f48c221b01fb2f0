//! Outfit slots and clothing category classification.

/// Outfit slots an item can occupy, derived from its category label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Headwear
    Hat,
    /// Shirts and other upper-body base layers
    Top,
    /// Pants, skirts, and shorts
    Bottom,
    /// Footwear
    Shoes,
    /// Jackets, sweaters, and other layering pieces
    Outer,
    /// Jewelry and similar extras
    Accessory,
}

const HAT_CATEGORIES: &[&str] = &["hat", "beanie", "cap"];
const TOP_CATEGORIES: &[&str] = &["shirt", "tshirt", "blouse", "top"];
const BOTTOM_CATEGORIES: &[&str] = &["pants", "jeans", "skirt", "shorts", "khaki"];
const SHOE_CATEGORIES: &[&str] = &["shoes", "sneakers", "boots", "sandals"];
const OUTER_CATEGORIES: &[&str] = &[
    "jacket",
    "coat",
    "cardigan",
    "flannel",
    "hoodie",
    "sweater",
    "button-up",
    "blazer",
];
const ACCESSORY_CATEGORIES: &[&str] = &["bracelet", "chain", "watch"];

impl Slot {
    /// Classify a category label into a slot, case-insensitively.
    ///
    /// Labels outside every slot set return `None`; such items only show
    /// up in outfits through legacy-mode padding.
    pub fn for_category(category: &str) -> Option<Slot> {
        let label = category.to_ascii_lowercase();
        Slot::all()
            .iter()
            .copied()
            .find(|slot| slot.categories().contains(&label.as_str()))
    }

    /// Category labels belonging to this slot.
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Slot::Hat => HAT_CATEGORIES,
            Slot::Top => TOP_CATEGORIES,
            Slot::Bottom => BOTTOM_CATEGORIES,
            Slot::Shoes => SHOE_CATEGORIES,
            Slot::Outer => OUTER_CATEGORIES,
            Slot::Accessory => ACCESSORY_CATEGORIES,
        }
    }

    /// Get the display name for this slot.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Hat => "Hat",
            Slot::Top => "Top",
            Slot::Bottom => "Bottom",
            Slot::Shoes => "Shoes",
            Slot::Outer => "Outerwear",
            Slot::Accessory => "Accessory",
        }
    }

    /// Get all slots in display order.
    pub fn all() -> &'static [Slot] {
        &[
            Slot::Hat,
            Slot::Top,
            Slot::Bottom,
            Slot::Shoes,
            Slot::Outer,
            Slot::Accessory,
        ]
    }
}

/// Ordered labels checked against filenames when inferring a category.
/// Earlier labels win when a filename contains more than one.
pub const CATEGORY_LABELS: &[&str] = &[
    "shirt",
    "pants",
    "jeans",
    "sweater",
    "shoes",
    "beanie",
    "cap",
    "khaki",
    "sneakers",
    "hoodie",
    "flannel",
    "jacket",
    "coat",
    "cardigan",
    "button-up",
    "blazer",
    "bracelet",
    "chain",
    "watch",
    "blouse",
    "skirt",
    "hat",
];

/// Category assigned when no label matches the filename.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Infer a category from a filename by substring match against
/// [`CATEGORY_LABELS`], case-insensitively.
pub fn infer_category(filename: &str) -> &'static str {
    let lower = filename.to_ascii_lowercase();
    CATEGORY_LABELS
        .iter()
        .copied()
        .find(|label| lower.contains(label))
        .unwrap_or(UNCATEGORIZED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_each_slot() {
        assert_eq!(Slot::for_category("beanie"), Some(Slot::Hat));
        assert_eq!(Slot::for_category("tshirt"), Some(Slot::Top));
        assert_eq!(Slot::for_category("khaki"), Some(Slot::Bottom));
        assert_eq!(Slot::for_category("sandals"), Some(Slot::Shoes));
        assert_eq!(Slot::for_category("button-up"), Some(Slot::Outer));
        assert_eq!(Slot::for_category("watch"), Some(Slot::Accessory));
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(Slot::for_category("Jeans"), Some(Slot::Bottom));
        assert_eq!(Slot::for_category("BLAZER"), Some(Slot::Outer));
    }

    #[test]
    fn test_unknown_category_has_no_slot() {
        assert_eq!(Slot::for_category("Uncategorized"), None);
        assert_eq!(Slot::for_category("scarf"), None);
    }

    #[test]
    fn test_infer_category_matches_substring() {
        assert_eq!(infer_category("IMG_blue_shirt.png"), "shirt");
        assert_eq!(infer_category("My-Sneakers-01.jpg"), "sneakers");
    }

    #[test]
    fn test_infer_category_earlier_label_wins() {
        // "shirt" precedes "hat" in the label order.
        assert_eq!(infer_category("shirt-with-hat.png"), "shirt");
    }

    #[test]
    fn test_infer_category_defaults_to_uncategorized() {
        assert_eq!(infer_category("holiday-photo.png"), UNCATEGORIZED);
    }
}
