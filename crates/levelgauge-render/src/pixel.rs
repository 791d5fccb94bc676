//! Continuous pixel bar.
//!
//! Row layout, relative to the row origin:
//!
//! ```text
//! Title:                       (0, 0)
//! [#####|#####|##   ]          "[" at (0, 20), boxes from (10, 33), "]" after the bar
//! ```
//!
//! The bar spans `viewport.width - 60` pixels. Fill is drawn as 20-pixel
//! tapered boxes plus one narrower box for the remainder.

use crate::{label, GaugeRenderer};
use levelgauge_core::fixed::Percentage;
use levelgauge_core::surface::{Color, Frame, Sprite, TextAlignment, Vec2, Viewport};
use log::debug;

/// Width of one full bar box.
pub const BOX_WIDTH: f32 = 20.0;
pub const BOX_HEIGHT: f32 = 12.0;
pub const BOX_TEXTURE: &str = "SquareTapered";
/// Horizontal space taken by margins and bracket glyphs.
pub const BAR_MARGIN: f32 = 60.0;

const BRACKET_OFFSET: Vec2 = Vec2::new(0.0, 20.0);
const BAR_START: Vec2 = Vec2::new(10.0, 0.0);
const BOX_OFFSET: Vec2 = Vec2::new(0.0, 13.0);

/// How a percentage maps onto bar boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFill {
    /// Total filled width in pixels.
    pub filled: f32,
    /// Number of full-width boxes.
    pub full_boxes: usize,
    /// Width of the trailing partial box, if it rounds down to at least 1px.
    pub partial: Option<f32>,
}

/// The continuous bar strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelBar {
    viewport: Viewport,
}

impl PixelBar {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Full bar width. Never negative.
    pub fn bar_max_width(&self) -> f32 {
        (self.viewport.width() - BAR_MARGIN).max(0.0)
    }

    /// Split the fill for `percentage` into boxes.
    ///
    /// The filled width is kept inside the bar so readings above 100% or
    /// below 0% cannot draw past the brackets.
    pub fn fill(&self, percentage: Percentage) -> BarFill {
        let bar_max = self.bar_max_width();
        let filled = if percentage.is_finite() {
            (bar_max * (percentage / 100.0)).clamp(0.0, bar_max)
        } else {
            0.0
        };

        let full_boxes = (filled / BOX_WIDTH).floor() as usize;
        let remainder = (filled - full_boxes as f32 * BOX_WIDTH).floor();
        BarFill {
            filled,
            full_boxes,
            partial: (remainder > 0.0).then_some(remainder),
        }
    }
}

fn bar_box(position: Vec2, width: f32) -> Sprite {
    Sprite::Texture {
        texture: BOX_TEXTURE.to_string(),
        position: position + BOX_OFFSET,
        size: Vec2::new(width, BOX_HEIGHT),
        color: Color::WHITE,
        alignment: TextAlignment::Left,
    }
}

impl GaugeRenderer for PixelBar {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render_row(&self, frame: &mut Frame, title: &str, percentage: Percentage, origin: Vec2) {
        let fill = self.fill(percentage);
        debug!("{title}: filling {} of {} px", fill.filled, self.bar_max_width());

        frame.add(label(format!("{title}:"), origin));

        let bracket = origin + BRACKET_OFFSET;
        frame.add(label("[", bracket));

        let bar_start = bracket + BAR_START;
        let mut position = bar_start;
        for _ in 0..fill.full_boxes {
            frame.add(bar_box(position, BOX_WIDTH));
            position += Vec2::new(BOX_WIDTH, 0.0);
        }
        if let Some(width) = fill.partial {
            frame.add(bar_box(position, width));
        }

        frame.add(label("]", bar_start + Vec2::new(self.bar_max_width(), 0.0)));
    }
}
