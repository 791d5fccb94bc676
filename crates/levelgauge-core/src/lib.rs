//! Levelgauge Core -- the sampling and aggregation engine for fill-level monitors.
//!
//! This crate provides the deterministic fixed-point quantities, the per-category
//! [`level::LevelResult`] snapshot, the host-facing block and surface traits, and
//! the aggregation engine that every levelgauge host depends on.
//!
//! # Tick Pipeline
//!
//! A monitor runs the same three phases on every tick:
//!
//! 1. **Sample** -- read tank and inventory readings from every classified block.
//! 2. **Aggregate** -- sum readings per [`level::Category`] into a `LevelResult`.
//! 3. **Render** -- fan the three percentages out to every configured surface.
//!
//! Classification happens once per initialization, never per tick:
//!
//! ```rust,ignore
//! let filter = ShipInventory::filter(&ignore, me.construct());
//! inventory.classify(directory.blocks(&filter));
//! let levels = inventory.levels()?;
//! ```
//!
//! # Key Types
//!
//! - [`block::Block`] -- A host handle that may report a tank reading, an
//!   inventory reading, or act as a display surface.
//! - [`block::Directory`] -- The host's block lookup (by filter, tag, or name).
//! - [`inventory::ShipInventory`] -- Classifies blocks into the Cargo, Hydrogen,
//!   and Oxygen buckets and aggregates each bucket.
//! - [`level::LevelResult`] -- Aggregated quantities plus a derived percentage.
//! - [`surface::Frame`] -- An ordered list of sprites presented atomically.
//! - [`fixed::Fixed64`] -- Q64.64 fixed-point type for quantity sums.

pub mod block;
pub mod fixed;
pub mod id;
pub mod inventory;
pub mod level;
pub mod surface;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
