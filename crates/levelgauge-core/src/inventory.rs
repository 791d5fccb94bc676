//! The aggregation engine.
//!
//! [`ShipInventory`] partitions the monitored blocks into the three
//! [`Category`] buckets once per initialization and sums each bucket on
//! demand. Missing readings contribute nothing; only a block the host has
//! invalidated makes a sum fail.

use crate::block::{Block, BlockError, BlockRef, ProviderShape};
use crate::id::ConstructId;
use crate::level::{Category, LevelResult, Levels};
use log::debug;

/// Blocks grouped by the category they are aggregated into.
#[derive(Debug, Default)]
pub struct ShipInventory {
    cargo: Vec<BlockRef>,
    hydrogen: Vec<BlockRef>,
    oxygen: Vec<BlockRef>,
}

impl ShipInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter that selects monitored blocks.
    ///
    /// A block passes when it belongs to `construct`, its kind is monitored,
    /// and its name contains none of the `ignore` entries (case-insensitive).
    /// The returned filter owns its copy of `ignore`.
    pub fn filter(ignore: &[String], construct: ConstructId) -> impl Fn(&dyn Block) -> bool + use<> {
        let ignore: Vec<String> = ignore
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        move |block: &dyn Block| {
            if block.construct() != construct {
                return false;
            }
            if !ignore.is_empty() {
                let name = block.name().to_lowercase();
                if ignore.iter().any(|i| name.contains(i.as_str())) {
                    return false;
                }
            }
            block.kind().is_monitored()
        }
    }

    /// Drop every classified block.
    pub fn clear(&mut self) {
        self.cargo.clear();
        self.hydrogen.clear();
        self.oxygen.clear();
    }

    /// Replace the bucket contents with `blocks`.
    ///
    /// Tanks whose subtype mentions oxygen go to Oxygen, every other tank to
    /// Hydrogen. Everything else is Cargo.
    pub fn classify(&mut self, blocks: impl IntoIterator<Item = BlockRef>) {
        self.clear();
        for block in blocks {
            match block.kind().shape() {
                ProviderShape::TankLike => {
                    debug!("Gas Tank/Generator Definition Subtype: {}", block.sub_kind());
                    if block.sub_kind().to_lowercase().contains("oxygen") {
                        self.oxygen.push(block);
                    } else {
                        self.hydrogen.push(block);
                    }
                }
                ProviderShape::InventoryLike | ProviderShape::Unsupported => {
                    self.cargo.push(block);
                }
            }
        }
    }

    /// Blocks currently classified into `category`.
    pub fn blocks(&self, category: Category) -> &[BlockRef] {
        match category {
            Category::Cargo => &self.cargo,
            Category::Hydrogen => &self.hydrogen,
            Category::Oxygen => &self.oxygen,
        }
    }

    pub fn len(&self) -> usize {
        self.cargo.len() + self.hydrogen.len() + self.oxygen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Aggregate one category.
    pub fn level(&self, category: Category) -> Result<LevelResult, BlockError> {
        let contribution: fn(&BlockRef) -> Result<LevelResult, BlockError> = match category {
            Category::Cargo => inventory_contribution,
            Category::Hydrogen | Category::Oxygen => tank_contribution,
        };
        sum_bucket(self.blocks(category), contribution)
    }

    pub fn cargo(&self) -> Result<LevelResult, BlockError> {
        self.level(Category::Cargo)
    }

    pub fn hydrogen(&self) -> Result<LevelResult, BlockError> {
        self.level(Category::Hydrogen)
    }

    pub fn oxygen(&self) -> Result<LevelResult, BlockError> {
        self.level(Category::Oxygen)
    }

    /// Aggregate all three categories.
    pub fn levels(&self) -> Result<Levels, BlockError> {
        Ok(Levels {
            cargo: self.cargo()?,
            hydrogen: self.hydrogen()?,
            oxygen: self.oxygen()?,
        })
    }
}

fn tank_contribution(block: &BlockRef) -> Result<LevelResult, BlockError> {
    Ok(block
        .tank()?
        .map(|tank| LevelResult::from_tank(&tank))
        .unwrap_or(LevelResult::ZERO))
}

fn inventory_contribution(block: &BlockRef) -> Result<LevelResult, BlockError> {
    Ok(block
        .inventory()?
        .map(|inv| LevelResult::from_inventory(&inv))
        .unwrap_or(LevelResult::ZERO))
}

#[cfg(not(feature = "parallel"))]
fn sum_bucket(
    blocks: &[BlockRef],
    contribution: fn(&BlockRef) -> Result<LevelResult, BlockError>,
) -> Result<LevelResult, BlockError> {
    blocks.iter().map(contribution).sum()
}

#[cfg(feature = "parallel")]
fn sum_bucket(
    blocks: &[BlockRef],
    contribution: fn(&BlockRef) -> Result<LevelResult, BlockError>,
) -> Result<LevelResult, BlockError> {
    use rayon::prelude::*;

    blocks
        .par_iter()
        .map(contribution)
        .try_reduce(|| LevelResult::ZERO, |a, b| Ok(a.merge(b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use crate::fixed::Fixed64;
    use crate::test_utils::*;

    #[test]
    fn empty_inventory_is_all_zero() {
        let inventory = ShipInventory::new();
        let levels = inventory.levels().unwrap();
        assert_eq!(levels, Levels::default());
        assert_eq!(levels.cargo.percentage(), 0.0);
    }

    #[test]
    fn tanks_split_on_oxygen_label() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[
            TestBlock::gas_tank("O2 Tank", "OxygenTankSmall", 100.0, 0.5),
            TestBlock::gas_tank("H2 Tank", "LargeHydrogenTank", 200.0, 1.0),
            TestBlock::gas_tank("Odd Tank", "NitrogenTank", 50.0, 0.0),
        ]));
        assert_eq!(inventory.blocks(Category::Oxygen).len(), 1);
        // Unknown gases land in the hydrogen bucket.
        assert_eq!(inventory.blocks(Category::Hydrogen).len(), 2);
        assert!(inventory.blocks(Category::Cargo).is_empty());
    }

    #[test]
    fn oxygen_label_is_case_insensitive() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[TestBlock::gas_tank("t", "SmallOXYGENTank", 1.0, 1.0)]));
        assert_eq!(inventory.blocks(Category::Oxygen).len(), 1);
    }

    #[test]
    fn non_tanks_are_cargo() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[
            TestBlock::container("Box", 10.0, 5.0, 20.0, 3),
            TestBlock::with_kind("Refinery", BlockKind::Production),
        ]));
        assert_eq!(inventory.blocks(Category::Cargo).len(), 2);
    }

    #[test]
    fn classify_replaces_previous_buckets() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[TestBlock::container("A", 1.0, 0.0, 0.0, 0)]));
        inventory.classify(refs(&[TestBlock::gas_tank("O", "Oxygen", 1.0, 0.0)]));
        assert_eq!(inventory.len(), 1);
        assert!(inventory.blocks(Category::Cargo).is_empty());
    }

    #[test]
    fn tank_levels_sum_capacity_and_fill() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[
            TestBlock::gas_tank("H1", "HydrogenTank", 100.0, 0.5),
            TestBlock::gas_tank("H2", "HydrogenTank", 300.0, 0.5),
        ]));
        let hydrogen = inventory.hydrogen().unwrap();
        assert_eq!(hydrogen.max_volume(), fixed(400.0));
        assert_eq!(hydrogen.current_volume(), fixed(200.0));
        assert_eq!(hydrogen.current_mass(), Fixed64::ZERO);
        assert_eq!(hydrogen.item_count(), 0);
        assert_eq!(hydrogen.percentage(), 50.0);
    }

    #[test]
    fn large_tank_fleet_keeps_exact_percentage() {
        let tanks: Vec<_> = (0..200)
            .map(|i| TestBlock::gas_tank(&format!("H{i}"), "LargeHydrogenTank", 15_000_000.0, 0.5))
            .collect();
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&tanks));
        let hydrogen = inventory.hydrogen().unwrap();
        assert_eq!(hydrogen.max_volume(), fixed(3_000_000_000.0));
        assert_eq!(hydrogen.current_volume(), fixed(1_500_000_000.0));
        assert_eq!(hydrogen.percentage(), 50.0);
    }

    #[test]
    fn cargo_levels_sum_every_field() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[
            TestBlock::container("A", 10.0, 2.0, 40.0, 5),
            TestBlock::container("B", 30.0, 8.0, 60.0, 7),
        ]));
        let cargo = inventory.cargo().unwrap();
        assert_eq!(cargo.max_volume(), fixed(40.0));
        assert_eq!(cargo.current_volume(), fixed(10.0));
        assert_eq!(cargo.current_mass(), fixed(100.0));
        assert_eq!(cargo.item_count(), 12);
        assert_eq!(cargo.percentage(), 25.0);
    }

    #[test]
    fn cargo_without_inventory_contributes_nothing() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[
            TestBlock::with_kind("Tool", BlockKind::ShipTool),
            TestBlock::container("Box", 4.0, 1.0, 1.0, 1),
        ]));
        assert_eq!(inventory.cargo().unwrap().max_volume(), fixed(4.0));
    }

    #[test]
    fn inconsistent_readings_are_not_clamped() {
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[TestBlock::container("Box", 10.0, 15.0, 0.0, 0)]));
        assert_eq!(inventory.cargo().unwrap().percentage(), 150.0);
    }

    #[test]
    fn invalidated_block_fails_the_sum() {
        let tank = TestBlock::gas_tank("H", "HydrogenTank", 100.0, 0.5);
        let mut inventory = ShipInventory::new();
        inventory.classify(refs(&[tank.clone()]));
        tank.invalidate();
        assert!(matches!(
            inventory.hydrogen(),
            Err(BlockError::Invalidated { .. })
        ));
        // Other buckets are unaffected.
        assert!(inventory.cargo().is_ok());
    }

    #[test]
    fn filter_rejects_other_constructs_ignored_names_and_kinds() {
        let filter = ShipInventory::filter(&["hidden".to_string()], home());
        let ok: BlockRef = TestBlock::container("Main Cargo", 1.0, 0.0, 0.0, 0);
        let ignored: BlockRef = TestBlock::container("HIDDEN stash", 1.0, 0.0, 0.0, 0);
        let foreign: BlockRef = TestBlock::new("Cargo", BlockKind::CargoContainer)
            .in_construct(ConstructId(99))
            .shared();
        let panel: BlockRef = TestBlock::panel("LCD", "");
        assert!(filter(ok.as_ref()));
        assert!(!filter(ignored.as_ref()));
        assert!(!filter(foreign.as_ref()));
        assert!(!filter(panel.as_ref()));
    }

    #[test]
    fn empty_ignore_entries_never_match() {
        let filter = ShipInventory::filter(&["".to_string(), " ".to_string()], home());
        let block: BlockRef = TestBlock::container("Box", 1.0, 0.0, 0.0, 0);
        assert!(filter(block.as_ref()));
    }
}
