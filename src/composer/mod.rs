//! Outfit composition from closet items.
//!
//! Two policies share a slot-picking core:
//!
//! - **Weather mode**: the condition decides which slots get filled (a
//!   cold or rainy day layers up, a hot day strips down to top and
//!   bottom, a temperate day flips coins). Shoes always go on when the
//!   closet has any, and an accessory joins half the time.
//! - **Legacy mode**: a shuffled grab of up to five items, rebuilt when
//!   the grab misses an essential slot the closet could have filled.
//!
//! Randomness is injected through a [`rand::Rng`] parameter so callers
//! can seed a deterministic generator.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use crate::color::Rgb;
use crate::model::{ClothingItem, GeneratedOutfit, Slot};
use crate::weather::WeatherCondition;


/// Maximum number of items in a legacy-mode outfit.
pub const MAX_OUTFIT_ITEMS: usize = 5;

/// Probability for the optional picks: outer over top, hat, accessory.
const COIN_FLIP: f64 = 0.5;

/// Slots that must be represented whenever the closet can fill them.
const ESSENTIAL_SLOTS: [Slot; 3] = [Slot::Bottom, Slot::Shoes, Slot::Top];

/// Constraints guiding outfit composition.
#[derive(Debug, Clone, Default)]
pub struct OutfitConstraints {
    /// Weather condition; `None` selects the legacy policy.
    pub condition: Option<WeatherCondition>,

    /// Preferred palette for slot picks.
    pub palette: Option<Vec<Rgb>>,
}

impl OutfitConstraints {
    /// Constraints for a weather condition, with no palette preference.
    pub fn for_condition(condition: WeatherCondition) -> Self {
        Self {
            condition: Some(condition),
            palette: None,
        }
    }

    /// Add a palette preference.
    pub fn with_palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// Compose an outfit from `items` under `constraints`.
///
/// An empty closet yields an empty outfit; composition never fails.
pub fn compose<R: Rng>(
    items: &[ClothingItem],
    constraints: &OutfitConstraints,
    rng: &mut R,
) -> GeneratedOutfit {
    if items.is_empty() {
        return GeneratedOutfit::default();
    }

    let outfit = match constraints.condition {
        Some(condition) => {
            compose_for_weather(items, condition, constraints.palette.as_deref(), rng)
        }
        None => compose_legacy(items, rng),
    };

    log::debug!(
        "Composed {} item(s) for {:?}",
        outfit.len(),
        constraints.condition
    );
    outfit
}

fn compose_for_weather<'a, R: Rng>(
    items: &'a [ClothingItem],
    condition: WeatherCondition,
    palette: Option<&[Rgb]>,
    rng: &mut R,
) -> GeneratedOutfit {
    let mut picks: Vec<&'a ClothingItem> = Vec::new();

    match condition {
        WeatherCondition::Cold | WeatherCondition::Rainy => {
            for slot in [Slot::Hat, Slot::Top, Slot::Outer, Slot::Bottom] {
                add_slot_pick(&mut picks, items, slot, palette, rng);
            }
        }
        WeatherCondition::Hot => {
            for slot in [Slot::Top, Slot::Bottom] {
                add_slot_pick(&mut picks, items, slot, palette, rng);
            }
        }
        WeatherCondition::Temperate => {
            if rng.random_bool(COIN_FLIP) {
                add_slot_pick(&mut picks, items, Slot::Outer, palette, rng);
            } else {
                add_slot_pick(&mut picks, items, Slot::Top, palette, rng);
            }
            add_slot_pick(&mut picks, items, Slot::Bottom, palette, rng);
            if rng.random_bool(COIN_FLIP) {
                add_slot_pick(&mut picks, items, Slot::Hat, palette, rng);
            }
        }
    }

    // Shoes go on once in every condition.
    if !picks.iter().any(|item| item.slot() == Some(Slot::Shoes)) {
        add_slot_pick(&mut picks, items, Slot::Shoes, palette, rng);
    }

    if rng.random_bool(COIN_FLIP) {
        add_slot_pick(&mut picks, items, Slot::Accessory, palette, rng);
    }

    GeneratedOutfit::from_items(&picks)
}

fn compose_legacy<'a, R: Rng>(items: &'a [ClothingItem], rng: &mut R) -> GeneratedOutfit {
    let mut shuffled: Vec<&'a ClothingItem> = items.iter().collect();
    shuffled.shuffle(rng);

    let mut picks: Vec<&'a ClothingItem> =
        shuffled.iter().copied().take(MAX_OUTFIT_ITEMS).collect();

    if !covers_essentials(&picks, items) {
        picks = rebuild_with_essentials(items, &shuffled, rng);
    }

    GeneratedOutfit::from_items(&picks)
}

/// Whether every essential slot the closet can fill is represented.
fn covers_essentials(picks: &[&ClothingItem], items: &[ClothingItem]) -> bool {
    ESSENTIAL_SLOTS.iter().all(|&slot| {
        let closet_has = items.iter().any(|item| item.slot() == Some(slot));
        !closet_has || picks.iter().any(|item| item.slot() == Some(slot))
    })
}

/// Rebuild a legacy outfit with essential coverage guaranteed: one pick
/// per fillable essential slot, padded from the shuffle order up to the
/// cap. Essentials are placed first, so trimming never evicts them.
fn rebuild_with_essentials<'a, R: Rng>(
    items: &'a [ClothingItem],
    shuffled: &[&'a ClothingItem],
    rng: &mut R,
) -> Vec<&'a ClothingItem> {
    let mut picks: Vec<&'a ClothingItem> = Vec::new();

    for slot in ESSENTIAL_SLOTS {
        if let Some(item) = pick_from_slot(items, slot, None, rng) {
            picks.push(item);
        }
    }

    for &item in shuffled {
        if picks.len() >= MAX_OUTFIT_ITEMS {
            break;
        }
        if !picks.iter().any(|pick| pick.id == item.id) {
            picks.push(item);
        }
    }

    picks.truncate(MAX_OUTFIT_ITEMS);
    picks
}

fn add_slot_pick<'a, R: Rng>(
    picks: &mut Vec<&'a ClothingItem>,
    items: &'a [ClothingItem],
    slot: Slot,
    palette: Option<&[Rgb]>,
    rng: &mut R,
) {
    if let Some(item) = pick_from_slot(items, slot, palette, rng) {
        picks.push(item);
    }
}

/// Pick one item of `slot` uniformly at random.
///
/// With a palette, candidates whose primary color equals a palette entry
/// are preferred; the filter is exact color equality, not distance. An
/// empty filtered set falls back to the whole slot.
fn pick_from_slot<'a, R: Rng>(
    items: &'a [ClothingItem],
    slot: Slot,
    palette: Option<&[Rgb]>,
    rng: &mut R,
) -> Option<&'a ClothingItem> {
    let candidates: Vec<&'a ClothingItem> = items
        .iter()
        .filter(|item| item.slot() == Some(slot))
        .collect();
    if candidates.is_empty() {
        return None;
    }

    if let Some(palette) = palette {
        let matching: Vec<&'a ClothingItem> = candidates
            .iter()
            .copied()
            .filter(|item| palette.contains(&item.color))
            .collect();
        if !matching.is_empty() {
            return matching.choose(rng).copied();
        }
    }

    candidates.choose(rng).copied()
}
