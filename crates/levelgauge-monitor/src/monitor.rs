//! The polling supervisor.
//!
//! # State machine
//!
//! ```text
//!            tick ok                      tick ok
//!   Ready ───────────► Ready    Recovering ───────► Ready (failures = 0)
//!     │ tick fails                   │ tick fails
//!     ▼                              ▼
//!   reinitialize once,           log the error, no reinitialize,
//!   failures = 1                 failures unchanged
//! ```
//!
//! Every failure resolves to "log and continue"; nothing here panics or
//! propagates an error to the host loop.

use crate::display::Display;
use crate::error::MonitorError;
use levelgauge_core::block::{BlockError, BlockRef, Directory};
use levelgauge_core::inventory::ShipInventory;
use levelgauge_core::level::Levels;
use levelgauge_data::MonitorConfig;
use log::{debug, error, info, warn};

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Levels were sampled and every surface redrawn.
    Rendered,
    /// The tick failed and state was rebuilt; nothing was drawn.
    Recovered(MonitorError),
    /// The tick failed again without an intervening success.
    Failed(MonitorError),
}

/// Samples the host's blocks and keeps the configured displays up to date.
#[derive(Debug)]
pub struct Monitor<D: Directory> {
    directory: D,
    /// The monitoring unit: source of the configuration and the construct.
    unit: BlockRef,
    inventory: ShipInventory,
    display: Display,
    config: MonitorConfig,
    failure_count: u32,
}

impl<D: Directory> Monitor<D> {
    /// Create a monitor and run the initial initialization.
    ///
    /// An initialization failure is logged; the monitor still ticks and will
    /// retry on its first failing tick.
    pub fn new(directory: D, unit: BlockRef) -> Self {
        let mut monitor = Self {
            directory,
            unit,
            inventory: ShipInventory::new(),
            display: Display::new(),
            config: MonitorConfig::default(),
            failure_count: 0,
        };
        monitor.reinitialize();
        monitor
    }

    /// Rebuild classification and the surface set from the current
    /// configuration.
    ///
    /// A configuration that cannot be read leaves the previous state in place.
    /// A missing display source is logged and leaves the surface set empty.
    pub fn initialize(&mut self) -> Result<(), MonitorError> {
        let config = match MonitorConfig::parse(&self.unit.custom_data()?) {
            Ok(config) => config,
            Err(e) => {
                warn!("Unable to parse configuration");
                return Err(e.into());
            }
        };

        self.display.set_suppress_errors(config.suppress_errors);
        self.inventory.clear();
        self.display.clear();

        let construct = self.unit.construct();
        let filter = ShipInventory::filter(&config.ignore, construct);
        self.inventory.classify(self.directory.blocks(&filter));
        debug!("Classified {} blocks", self.inventory.len());

        let result = self.display.initialize(
            &self.directory,
            &config.search,
            &config.panels,
            &config.ignore,
            construct,
        );
        self.config = config;
        match result {
            Err(e) if !e.is_fatal() => warn!("{e}"),
            other => other?,
        }

        info!("Initialization Complete");
        Ok(())
    }

    /// Run one sample-and-render pass.
    pub fn tick(&mut self) -> TickOutcome {
        match self.run() {
            Ok(()) => {
                self.failure_count = 0;
                TickOutcome::Rendered
            }
            Err(e) if self.failure_count == 0 => {
                debug!("Tick failed, reinitializing: {e}");
                self.failure_count += 1;
                self.reinitialize();
                TickOutcome::Recovered(e)
            }
            Err(e) => {
                error!("Unhandled error. Tried reinitializing but still failed.");
                error!("{e}");
                TickOutcome::Failed(e)
            }
        }
    }

    /// Aggregate the three categories for the current block set.
    pub fn levels(&self) -> Result<Levels, BlockError> {
        self.inventory.levels()
    }

    pub fn failure_count(&self) -> u32 {
        self.failure_count
    }

    pub fn inventory(&self) -> &ShipInventory {
        &self.inventory
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    /// The configuration read by the last successful parse.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    fn run(&mut self) -> Result<(), MonitorError> {
        let levels = self.levels()?;
        self.display
            .update(Some(&levels.cargo), Some(&levels.hydrogen), Some(&levels.oxygen))
    }

    fn reinitialize(&mut self) {
        if let Err(e) = self.initialize() {
            error!("{e}");
        }
    }
}
