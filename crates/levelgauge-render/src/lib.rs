//! Gauge rendering for levelgauge surfaces.
//!
//! A surface draws one row per enabled [`Category`], stacked top to bottom in
//! the fixed order Cargo, Hydrogen, Oxygen. Each row is produced by a
//! [`GaugeRenderer`] strategy:
//!
//! - [`PixelBar`] -- a continuous bar of tapered boxes sized to the surface.
//! - [`GlyphBar`] -- a fixed number of full/half/empty glyph segments.
//!
//! Every render pass starts from an empty [`Frame`].

pub mod glyph;
pub mod pixel;

pub use glyph::GlyphBar;
pub use pixel::PixelBar;

use levelgauge_core::fixed::Percentage;
use levelgauge_core::level::{Category, LevelResult};
use levelgauge_core::surface::{Color, Frame, Sprite, TextAlignment, Vec2, Viewport};
use levelgauge_data::{GaugeMode, SurfaceSettings};
use serde::{Deserialize, Serialize};

/// Offset of the first row from the viewport origin.
pub const ROW_ORIGIN: Vec2 = Vec2::new(20.0, 20.0);
/// Vertical distance between rows.
pub const ROW_SPACING: f32 = 40.0;
pub const TEXT_SCALE: f32 = 0.8;
pub const FONT: &str = "White";

// ---------------------------------------------------------------------------
// Gauge values
// ---------------------------------------------------------------------------

/// The three percentages a surface draws.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GaugeValues {
    pub cargo: Percentage,
    pub hydrogen: Percentage,
    pub oxygen: Percentage,
}

impl GaugeValues {
    /// Extract percentages; an absent result reads as 0.
    pub fn from_levels(
        cargo: Option<&LevelResult>,
        hydrogen: Option<&LevelResult>,
        oxygen: Option<&LevelResult>,
    ) -> Self {
        let pct = |r: Option<&LevelResult>| r.map(LevelResult::percentage).unwrap_or(0.0);
        Self {
            cargo: pct(cargo),
            hydrogen: pct(hydrogen),
            oxygen: pct(oxygen),
        }
    }

    pub fn get(&self, category: Category) -> Percentage {
        match category {
            Category::Cargo => self.cargo,
            Category::Hydrogen => self.hydrogen,
            Category::Oxygen => self.oxygen,
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer trait
// ---------------------------------------------------------------------------

/// A gauge drawing strategy bound to one surface's viewport.
pub trait GaugeRenderer: std::fmt::Debug + Send + Sync {
    /// The viewport this renderer draws into.
    fn viewport(&self) -> Viewport;

    /// Append the sprites for one gauge row starting at `origin`.
    fn render_row(&self, frame: &mut Frame, title: &str, percentage: Percentage, origin: Vec2);

    /// Draw every enabled row into a fresh frame.
    fn render(&self, settings: &SurfaceSettings, values: &GaugeValues) -> Frame {
        let mut frame = Frame::new();
        let mut origin = self.viewport().position + ROW_ORIGIN;
        for category in Category::ALL {
            if !settings.shows(category) {
                continue;
            }
            self.render_row(&mut frame, category.title(), values.get(category), origin);
            origin += Vec2::new(0.0, ROW_SPACING);
        }
        frame
    }
}

/// Build the strategy selected by `settings` for a surface with `viewport`.
pub fn renderer_for(settings: &SurfaceSettings, viewport: Viewport) -> Box<dyn GaugeRenderer> {
    match settings.mode {
        GaugeMode::Pixel => Box::new(PixelBar::new(viewport)),
        GaugeMode::Glyph => Box::new(GlyphBar::from_settings(settings, viewport)),
    }
}

/// A white, left-aligned text sprite in the gauge font.
pub(crate) fn label(text: impl Into<String>, position: Vec2) -> Sprite {
    Sprite::Text {
        text: text.into(),
        position,
        scale: TEXT_SCALE,
        color: Color::WHITE,
        alignment: TextAlignment::Left,
        font: FONT.to_string(),
    }
}
