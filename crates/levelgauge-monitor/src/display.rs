//! The output coordinator.
//!
//! [`Display`] resolves the configured display surfaces once per
//! initialization, and on every update fans one set of levels out to each
//! surface's gauge renderer.

use crate::error::MonitorError;
use levelgauge_core::block::{Block, BlockRef, Directory};
use levelgauge_core::id::ConstructId;
use levelgauge_core::level::LevelResult;
use levelgauge_core::surface::ContentType;
use levelgauge_data::SurfaceSettings;
use levelgauge_render::{renderer_for, GaugeRenderer, GaugeValues};
use log::{debug, warn};

// ---------------------------------------------------------------------------
// DisplayPanel
// ---------------------------------------------------------------------------

/// One resolved surface with its settings and renderer.
#[derive(Debug)]
struct DisplayPanel {
    block: BlockRef,
    settings: SurfaceSettings,
    renderer: Box<dyn GaugeRenderer>,
}

impl DisplayPanel {
    /// Returns `None` when the block cannot be drawn on.
    fn new(block: BlockRef) -> Result<Option<Self>, MonitorError> {
        let Some(surface) = block.display() else {
            return Ok(None);
        };
        let settings = SurfaceSettings::from_custom_data(&block.custom_data()?);
        let renderer = renderer_for(&settings, surface.viewport());
        Ok(Some(Self {
            block,
            settings,
            renderer,
        }))
    }

    fn update(&self, values: &GaugeValues) -> Result<(), MonitorError> {
        let surface = self.block.display().ok_or_else(|| MonitorError::NotDisplay {
            name: self.block.name().to_string(),
        })?;
        surface.set_content_type(ContentType::Script)?;
        surface.present(self.renderer.render(&self.settings, values))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// The set of configured display surfaces.
#[derive(Debug, Default)]
pub struct Display {
    panels: Vec<DisplayPanel>,
    suppress_errors: bool,
}

impl Display {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress_errors(&self) -> bool {
        self.suppress_errors
    }

    /// When set, unresolvable or unusable displays are skipped instead of
    /// failing initialization, and failing surfaces are skipped on update.
    pub fn set_suppress_errors(&mut self, suppress: bool) {
        self.suppress_errors = suppress;
    }

    pub fn clear(&mut self) {
        self.panels.clear();
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Names of the configured surfaces, in update order.
    pub fn names(&self) -> Vec<&str> {
        self.panels.iter().map(|p| p.block.name()).collect()
    }

    /// Settings resolved for the surface called `name`.
    pub fn settings(&self, name: &str) -> Option<&SurfaceSettings> {
        self.panels
            .iter()
            .find(|p| p.block.name() == name)
            .map(|p| &p.settings)
    }

    /// Resolve the surface set from explicit names and a name search.
    ///
    /// Named surfaces come first, in configuration order, followed by search
    /// hits. Only surfaces in `construct` are used. On error the set is left
    /// empty.
    pub fn initialize(
        &mut self,
        directory: &dyn Directory,
        search: &str,
        names: &[String],
        ignore: &[String],
        construct: ConstructId,
    ) -> Result<(), MonitorError> {
        self.clear();

        let search = search.trim();
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();
        if search.is_empty() && names.is_empty() {
            return Err(MonitorError::ConfigurationMissing);
        }

        let mut panels = Vec::new();

        for name in names {
            let Some(block) = directory.find_by_name(name) else {
                self.reject(MonitorError::UnresolvedName {
                    name: name.to_string(),
                })?;
                continue;
            };
            if block.construct() != construct {
                debug!("Display '{name}' is on another construct; skipped");
                continue;
            }
            if let Some(panel) = self.resolve(block)? {
                panels.push(panel);
            }
        }

        if !search.is_empty() {
            let ignore: Vec<String> = ignore.iter().map(|i| i.to_lowercase()).collect();
            let filter = |block: &dyn Block| {
                block.display().is_some()
                    && block.construct() == construct
                    && !is_ignored(block.name(), &ignore)
            };
            for block in directory.search(search, &filter) {
                if let Some(panel) = self.resolve(block)? {
                    panels.push(panel);
                }
            }
        }

        self.panels = panels;
        Ok(())
    }

    /// Redraw every surface. Absent results read as 0%.
    pub fn update(
        &self,
        cargo: Option<&LevelResult>,
        hydrogen: Option<&LevelResult>,
        oxygen: Option<&LevelResult>,
    ) -> Result<(), MonitorError> {
        let values = GaugeValues::from_levels(cargo, hydrogen, oxygen);
        for panel in &self.panels {
            if let Err(e) = panel.update(&values) {
                if !self.suppress_errors {
                    return Err(e);
                }
                warn!("Skipping display '{}': {e}", panel.block.name());
            }
        }
        Ok(())
    }

    fn resolve(&self, block: BlockRef) -> Result<Option<DisplayPanel>, MonitorError> {
        let name = block.name().to_string();
        match DisplayPanel::new(block)? {
            Some(panel) => Ok(Some(panel)),
            None => {
                self.reject(MonitorError::NotDisplay { name })?;
                Ok(None)
            }
        }
    }

    /// Fail with `err`, or log and swallow it when errors are suppressed.
    fn reject(&self, err: MonitorError) -> Result<(), MonitorError> {
        if self.suppress_errors {
            debug!("{err}");
            Ok(())
        } else {
            Err(err)
        }
    }
}

fn is_ignored(name: &str, ignore: &[String]) -> bool {
    let name = name.to_lowercase();
    ignore
        .iter()
        .any(|i| !i.trim().is_empty() && name.contains(i.trim()))
}
