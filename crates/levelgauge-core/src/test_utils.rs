//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]`. Provides an
//! in-memory [`TestBlock`] that can play any block role (tank, inventory,
//! display, or inert), and a [`TestDirectory`] that serves them.

use crate::block::{
    Block, BlockError, BlockKind, BlockRef, Directory, InventoryReading, TankReading,
};
use crate::fixed::{f64_to_fixed64, Fixed64};
use crate::id::ConstructId;
use crate::surface::{ContentType, Frame, TextSurface, Vec2};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// ===========================================================================
// Small helpers
// ===========================================================================

pub fn fixed(v: f64) -> Fixed64 {
    f64_to_fixed64(v)
}

/// The construct every helper block belongs to unless told otherwise.
pub fn home() -> ConstructId {
    ConstructId(1)
}

/// Upcast a slice of test blocks into shared handles.
pub fn refs(blocks: &[Arc<TestBlock>]) -> Vec<BlockRef> {
    blocks.iter().map(|b| b.clone() as BlockRef).collect()
}

// ===========================================================================
// TestBlock
// ===========================================================================

/// An in-memory block with switchable readings and a frame recorder.
#[derive(Debug)]
pub struct TestBlock {
    name: String,
    kind: BlockKind,
    sub_kind: String,
    construct: ConstructId,
    custom_data: Mutex<String>,
    tank: Mutex<Option<TankReading>>,
    inventory: Mutex<Option<InventoryReading>>,
    texture_size: Vec2,
    surface_size: Vec2,
    content: Mutex<ContentType>,
    frames: Mutex<Vec<Frame>>,
    valid: AtomicBool,
}

impl TestBlock {
    /// A bare block of `kind` in the home construct.
    pub fn new(name: &str, kind: BlockKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            sub_kind: String::new(),
            construct: home(),
            custom_data: Mutex::new(String::new()),
            tank: Mutex::new(None),
            inventory: Mutex::new(None),
            texture_size: Vec2::new(512.0, 512.0),
            surface_size: Vec2::new(512.0, 512.0),
            content: Mutex::new(ContentType::None),
            frames: Mutex::new(Vec::new()),
            valid: AtomicBool::new(true),
        }
    }

    pub fn in_construct(mut self, construct: ConstructId) -> Self {
        self.construct = construct;
        self
    }

    pub fn with_sub_kind(mut self, sub_kind: &str) -> Self {
        self.sub_kind = sub_kind.to_string();
        self
    }

    pub fn with_custom_data(self, data: &str) -> Self {
        *self.custom_data.lock().unwrap() = data.to_string();
        self
    }

    pub fn with_sizes(mut self, texture: Vec2, surface: Vec2) -> Self {
        self.texture_size = texture;
        self.surface_size = surface;
        self
    }

    pub fn with_tank(self, capacity: f64, filled_ratio: f64) -> Self {
        *self.tank.lock().unwrap() = Some(TankReading {
            capacity,
            filled_ratio,
        });
        self
    }

    pub fn with_inventory(self, max_volume: f64, current_volume: f64, mass: f64, items: u32) -> Self {
        *self.inventory.lock().unwrap() = Some(InventoryReading {
            current_volume: fixed(current_volume),
            max_volume: fixed(max_volume),
            current_mass: fixed(mass),
            item_count: items,
        });
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    // -- Shortcuts ----------------------------------------------------------

    pub fn gas_tank(name: &str, sub_kind: &str, capacity: f64, filled_ratio: f64) -> Arc<Self> {
        Self::new(name, BlockKind::GasTank)
            .with_sub_kind(sub_kind)
            .with_tank(capacity, filled_ratio)
            .shared()
    }

    pub fn container(name: &str, max_volume: f64, current_volume: f64, mass: f64, items: u32) -> Arc<Self> {
        Self::new(name, BlockKind::CargoContainer)
            .with_inventory(max_volume, current_volume, mass, items)
            .shared()
    }

    pub fn panel(name: &str, custom_data: &str) -> Arc<Self> {
        Self::new(name, BlockKind::TextPanel)
            .with_custom_data(custom_data)
            .shared()
    }

    pub fn with_kind(name: &str, kind: BlockKind) -> Arc<Self> {
        Self::new(name, kind).shared()
    }

    // -- Runtime controls ---------------------------------------------------

    /// Make every subsequent read fail as if the host removed the block.
    pub fn invalidate(&self) {
        self.valid.store(false, Ordering::SeqCst);
    }

    pub fn revalidate(&self) {
        self.valid.store(true, Ordering::SeqCst);
    }

    pub fn set_fill(&self, filled_ratio: f64) {
        if let Some(tank) = self.tank.lock().unwrap().as_mut() {
            tank.filled_ratio = filled_ratio;
        }
    }

    pub fn set_custom_data(&self, data: &str) {
        *self.custom_data.lock().unwrap() = data.to_string();
    }

    /// Every frame presented so far.
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.frames.lock().unwrap().last().cloned()
    }

    pub fn content_type(&self) -> ContentType {
        *self.content.lock().unwrap()
    }

    fn check(&self) -> Result<(), BlockError> {
        if self.valid.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(BlockError::Invalidated {
                name: self.name.clone(),
            })
        }
    }
}

impl Block for TestBlock {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BlockKind {
        self.kind
    }

    fn sub_kind(&self) -> &str {
        &self.sub_kind
    }

    fn construct(&self) -> ConstructId {
        self.construct
    }

    fn custom_data(&self) -> Result<String, BlockError> {
        self.check()?;
        Ok(self.custom_data.lock().unwrap().clone())
    }

    fn tank(&self) -> Result<Option<TankReading>, BlockError> {
        self.check()?;
        Ok(*self.tank.lock().unwrap())
    }

    fn inventory(&self) -> Result<Option<InventoryReading>, BlockError> {
        self.check()?;
        Ok(*self.inventory.lock().unwrap())
    }

    fn display(&self) -> Option<&dyn TextSurface> {
        if self.kind == BlockKind::TextPanel {
            Some(self as &dyn TextSurface)
        } else {
            None
        }
    }
}

impl TextSurface for TestBlock {
    fn texture_size(&self) -> Vec2 {
        self.texture_size
    }

    fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    fn set_content_type(&self, content: ContentType) -> Result<(), BlockError> {
        self.check()?;
        *self.content.lock().unwrap() = content;
        Ok(())
    }

    fn present(&self, frame: Frame) -> Result<(), BlockError> {
        self.check()?;
        self.frames.lock().unwrap().push(frame);
        Ok(())
    }
}

// ===========================================================================
// TestDirectory
// ===========================================================================

/// A mutable in-memory block directory.
#[derive(Debug, Default)]
pub struct TestDirectory {
    blocks: Mutex<Vec<BlockRef>>,
}

impl TestDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: &[Arc<TestBlock>]) -> Self {
        Self {
            blocks: Mutex::new(refs(blocks)),
        }
    }

    pub fn add(&self, block: Arc<TestBlock>) {
        self.blocks.lock().unwrap().push(block);
    }

    /// Remove every block named `name`.
    pub fn remove(&self, name: &str) {
        self.blocks.lock().unwrap().retain(|b| b.name() != name);
    }
}

impl Directory for TestDirectory {
    fn blocks(&self, filter: &dyn Fn(&dyn Block) -> bool) -> Vec<BlockRef> {
        self.blocks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| filter(b.as_ref()))
            .cloned()
            .collect()
    }

    fn search(&self, pattern: &str, filter: &dyn Fn(&dyn Block) -> bool) -> Vec<BlockRef> {
        let pattern = pattern.to_lowercase();
        self.blocks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.name().to_lowercase().contains(&pattern) && filter(b.as_ref()))
            .cloned()
            .collect()
    }

    fn find_by_name(&self, name: &str) -> Option<BlockRef> {
        self.blocks
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.name() == name)
            .cloned()
    }
}
