//! Aggregated fill levels and the categories they are computed for.

use crate::block::{InventoryReading, TankReading};
use crate::fixed::{f64_to_fixed64, raw_ratio_percent, Fixed64, Percentage};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the three fixed aggregation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Cargo,
    Hydrogen,
    Oxygen,
}

impl Category {
    /// All categories in render order.
    pub const ALL: [Category; 3] = [Category::Cargo, Category::Hydrogen, Category::Oxygen];

    /// Title used on gauge rows.
    pub fn title(self) -> &'static str {
        match self {
            Category::Cargo => "Cargo",
            Category::Hydrogen => "Hydrogen",
            Category::Oxygen => "Oxygen",
        }
    }
}

// ---------------------------------------------------------------------------
// LevelResult
// ---------------------------------------------------------------------------

/// Aggregated quantity snapshot for one category.
///
/// Built once per tick by the aggregation engine and never mutated after.
/// `current_volume <= max_volume` is expected from well-behaved hosts but not
/// enforced; inconsistent readings are carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelResult {
    current_volume: Fixed64,
    max_volume: Fixed64,
    current_mass: Fixed64,
    item_count: u32,
}

impl LevelResult {
    /// A result with every field zero.
    pub const ZERO: LevelResult = LevelResult {
        current_volume: Fixed64::ZERO,
        max_volume: Fixed64::ZERO,
        current_mass: Fixed64::ZERO,
        item_count: 0,
    };

    pub fn new(
        current_volume: Fixed64,
        max_volume: Fixed64,
        current_mass: Fixed64,
        item_count: u32,
    ) -> Self {
        Self {
            current_volume,
            max_volume,
            current_mass,
            item_count,
        }
    }

    /// Contribution of a single tank: capacity and `capacity * filled_ratio`.
    pub fn from_tank(tank: &TankReading) -> Self {
        Self {
            current_volume: f64_to_fixed64(tank.capacity * tank.filled_ratio),
            max_volume: f64_to_fixed64(tank.capacity),
            ..Self::ZERO
        }
    }

    /// Contribution of a single inventory.
    pub fn from_inventory(inventory: &InventoryReading) -> Self {
        Self {
            current_volume: inventory.current_volume,
            max_volume: inventory.max_volume,
            current_mass: inventory.current_mass,
            item_count: inventory.item_count,
        }
    }

    /// Field-wise sum. Saturates instead of overflowing.
    #[must_use]
    pub fn merge(self, other: LevelResult) -> LevelResult {
        LevelResult {
            current_volume: self.current_volume.saturating_add(other.current_volume),
            max_volume: self.max_volume.saturating_add(other.max_volume),
            current_mass: self.current_mass.saturating_add(other.current_mass),
            item_count: self.item_count.saturating_add(other.item_count),
        }
    }

    pub fn current_volume(&self) -> Fixed64 {
        self.current_volume
    }

    pub fn max_volume(&self) -> Fixed64 {
        self.max_volume
    }

    pub fn current_mass(&self) -> Fixed64 {
        self.current_mass
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Fill percentage: 0 when either volume is zero, otherwise
    /// `current / max * 100` on the raw fixed-point representation.
    pub fn percentage(&self) -> Percentage {
        raw_ratio_percent(self.current_volume, self.max_volume)
    }
}

impl std::iter::Sum for LevelResult {
    fn sum<I: Iterator<Item = LevelResult>>(iter: I) -> Self {
        iter.fold(LevelResult::ZERO, LevelResult::merge)
    }
}

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// The three per-category results of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Levels {
    pub cargo: LevelResult,
    pub hydrogen: LevelResult,
    pub oxygen: LevelResult,
}

impl Levels {
    pub fn get(&self, category: Category) -> &LevelResult {
        match category {
            Category::Cargo => &self.cargo,
            Category::Hydrogen => &self.hydrogen,
            Category::Oxygen => &self.oxygen,
        }
    }
}
