//! Host block handles and the directory that hands them out.
//!
//! The host owns every block. The engine only holds shared [`BlockRef`]s and
//! reads snapshots from them; any read may fail once the host has removed or
//! closed the block, which surfaces as [`BlockError::Invalidated`].

use crate::fixed::Fixed64;
use crate::id::ConstructId;
use crate::surface::TextSurface;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to a host block.
pub type BlockRef = Arc<dyn Block>;

// ---------------------------------------------------------------------------
// Block kinds
// ---------------------------------------------------------------------------

/// The host's block type. Only some kinds carry something worth monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Production,
    CargoContainer,
    Cockpit,
    Collector,
    GasTank,
    ConveyorTurret,
    GasGenerator,
    Reactor,
    Connector,
    ShipTool,
    GatlingGun,
    MissileLauncher,
    Store,
    TextPanel,
    Other,
}

/// Which reading a block is aggregated through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderShape {
    TankLike,
    InventoryLike,
    Unsupported,
}

impl BlockKind {
    /// Capability shape of this kind, resolved once at classification.
    pub fn shape(self) -> ProviderShape {
        match self {
            BlockKind::GasTank => ProviderShape::TankLike,
            BlockKind::Production
            | BlockKind::CargoContainer
            | BlockKind::Cockpit
            | BlockKind::Collector
            | BlockKind::ConveyorTurret
            | BlockKind::GasGenerator
            | BlockKind::Reactor
            | BlockKind::Connector
            | BlockKind::ShipTool
            | BlockKind::GatlingGun
            | BlockKind::MissileLauncher
            | BlockKind::Store => ProviderShape::InventoryLike,
            BlockKind::TextPanel | BlockKind::Other => ProviderShape::Unsupported,
        }
    }

    /// Whether blocks of this kind are picked up by the monitor at all.
    pub fn is_monitored(self) -> bool {
        self.shape() != ProviderShape::Unsupported
    }
}

// ---------------------------------------------------------------------------
// Readings
// ---------------------------------------------------------------------------

/// Snapshot of a gas tank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TankReading {
    /// Total capacity in litres.
    pub capacity: f64,
    /// Fill fraction, nominally 0..=1.
    pub filled_ratio: f64,
}

/// Snapshot of an item inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventoryReading {
    pub current_volume: Fixed64,
    pub max_volume: Fixed64,
    pub current_mass: Fixed64,
    pub item_count: u32,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised when reading from a host block.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BlockError {
    /// The block was removed or closed by the host since it was resolved.
    #[error("block '{name}' is no longer valid")]
    Invalidated { name: String },

    /// The host could not produce the requested reading.
    #[error("block '{name}' is unavailable: {detail}")]
    Unavailable { name: String, detail: String },
}

// ---------------------------------------------------------------------------
// Block trait
// ---------------------------------------------------------------------------

/// A host block that can be classified, sampled, or drawn on.
///
/// Only `name`, `kind`, `sub_kind`, and `construct` are required. A block
/// exposes at most one of `tank` and `inventory`; the defaults report neither.
pub trait Block: std::fmt::Debug + Send + Sync {
    /// Display name, as the player sees it.
    fn name(&self) -> &str;

    fn kind(&self) -> BlockKind;

    /// Definition subtype label, e.g. `"OxygenTankSmall"`.
    fn sub_kind(&self) -> &str;

    fn construct(&self) -> ConstructId;

    /// Free-form configuration text attached to the block.
    fn custom_data(&self) -> Result<String, BlockError> {
        Ok(String::new())
    }

    fn tank(&self) -> Result<Option<TankReading>, BlockError> {
        Ok(None)
    }

    fn inventory(&self) -> Result<Option<InventoryReading>, BlockError> {
        Ok(None)
    }

    /// The display capability, if this block is a surface.
    fn display(&self) -> Option<&dyn TextSurface> {
        None
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// The host's block lookup.
pub trait Directory {
    /// Every block accepted by `filter`.
    fn blocks(&self, filter: &dyn Fn(&dyn Block) -> bool) -> Vec<BlockRef>;

    /// Blocks whose name matches `pattern` and that are accepted by `filter`.
    fn search(&self, pattern: &str, filter: &dyn Fn(&dyn Block) -> bool) -> Vec<BlockRef>;

    /// The block with exactly this name, if any.
    fn find_by_name(&self, name: &str) -> Option<BlockRef>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_tank_is_tank_like() {
        assert_eq!(BlockKind::GasTank.shape(), ProviderShape::TankLike);
    }

    #[test]
    fn gas_generator_is_inventory_like() {
        // Generators hold ice, not gas.
        assert_eq!(BlockKind::GasGenerator.shape(), ProviderShape::InventoryLike);
    }

    #[test]
    fn panels_and_unknown_blocks_are_not_monitored() {
        assert!(!BlockKind::TextPanel.is_monitored());
        assert!(!BlockKind::Other.is_monitored());
        assert!(BlockKind::CargoContainer.is_monitored());
        assert!(BlockKind::Reactor.is_monitored());
    }

    #[test]
    fn invalidated_error_names_block() {
        let err = BlockError::Invalidated {
            name: "Tank 1".to_string(),
        };
        assert_eq!(err.to_string(), "block 'Tank 1' is no longer valid");
    }
}
