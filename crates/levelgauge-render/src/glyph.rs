//! Quantized glyph bar.
//!
//! Each of the `N` segments covers `100 / N` percent. Fully covered segments
//! use the full symbol; a trailing segment at least half covered uses the half
//! symbol; the rest are padded with the empty symbol, so the gauge is always
//! exactly `N` glyphs long.

use crate::{label, GaugeRenderer};
use levelgauge_core::fixed::Percentage;
use levelgauge_core::surface::{Frame, Vec2, Viewport};
use levelgauge_data::settings::{EMPTY_SYMBOL, MAX_SEGMENTS};
use levelgauge_data::SurfaceSettings;

/// The glyph bar strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphBar {
    viewport: Viewport,
    full: String,
    half: String,
    empty: String,
    segments: u32,
}

impl GlyphBar {
    pub fn new(viewport: Viewport, full: &str, half: &str, segments: u32) -> Self {
        Self {
            viewport,
            full: full.to_string(),
            half: half.to_string(),
            empty: EMPTY_SYMBOL.to_string(),
            segments: segments.clamp(1, MAX_SEGMENTS),
        }
    }

    pub fn from_settings(settings: &SurfaceSettings, viewport: Viewport) -> Self {
        Self::new(viewport, &settings.full_symbol, &settings.half_symbol, settings.segments)
    }

    /// Number of full segments and whether a half segment follows.
    pub fn layout(&self, percentage: Percentage) -> (usize, bool) {
        let n = self.segments as usize;
        let p = if percentage.is_finite() {
            percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let span = 100.0 / n as f32;
        let full = ((p / span).floor() as usize).min(n);
        let partial = p % span;
        let half = full < n && partial > 0.0 && partial >= span / 2.0;
        (full, half)
    }

    /// The gauge text for `percentage`, exactly `segments` glyphs long.
    pub fn gauge(&self, percentage: Percentage) -> String {
        let n = self.segments as usize;
        let (full, half) = self.layout(percentage);
        let empty = n - full - usize::from(half);

        let mut out = self.full.repeat(full);
        if half {
            out.push_str(&self.half);
        }
        out.push_str(&self.empty.repeat(empty));
        out
    }
}

impl GaugeRenderer for GlyphBar {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn render_row(&self, frame: &mut Frame, title: &str, percentage: Percentage, origin: Vec2) {
        frame.add(label(format!("{title}: {}", self.gauge(percentage)), origin));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(segments: u32) -> GlyphBar {
        GlyphBar::new(Viewport::default(), "#", "=", segments)
    }

    #[test]
    fn fifty_five_percent_of_ten() {
        let bar = glyphs(10);
        assert_eq!(bar.layout(55.0), (5, true));
        assert_eq!(bar.gauge(55.0), "#####=░░░░");
    }

    #[test]
    fn below_half_segment_is_dropped() {
        assert_eq!(glyphs(10).gauge(54.0), "#####░░░░░");
    }

    #[test]
    fn empty_and_full() {
        assert_eq!(glyphs(10).gauge(0.0), "░░░░░░░░░░");
        assert_eq!(glyphs(10).gauge(100.0), "##########");
    }

    #[test]
    fn out_of_range_is_padded_to_length() {
        let bar = glyphs(10);
        assert_eq!(bar.gauge(180.0).chars().count(), 10);
        assert_eq!(bar.gauge(-20.0).chars().count(), 10);
        assert_eq!(bar.gauge(f32::NAN), "░░░░░░░░░░");
    }

    #[test]
    fn other_segment_counts_scale_the_span() {
        // 4 segments of 25%: 60% is two full and 10/25 of a third.
        assert_eq!(glyphs(4).gauge(60.0), "##░░");
        // 70% is two full and 20/25 of a third.
        assert_eq!(glyphs(4).gauge(70.0), "##=░");
    }

    #[test]
    fn zero_segments_become_one() {
        assert_eq!(glyphs(0).gauge(100.0), "#");
    }

    #[test]
    fn segment_count_is_capped() {
        let gauge = glyphs(u32::MAX).gauge(0.0);
        assert_eq!(gauge.chars().count(), MAX_SEGMENTS as usize);
    }

    #[test]
    fn settings_symbols_are_used() {
        let settings = SurfaceSettings {
            full_symbol: "X".to_string(),
            half_symbol: "x".to_string(),
            segments: 5,
            ..SurfaceSettings::default()
        };
        let bar = GlyphBar::from_settings(&settings, Viewport::default());
        assert_eq!(bar.gauge(50.0), "XXx░░");
    }

    #[test]
    fn row_is_single_text_sprite() {
        let mut frame = Frame::new();
        glyphs(10).render_row(&mut frame, "Cargo", 100.0, Vec2::new(20.0, 20.0));
        assert_eq!(frame.texts().collect::<Vec<_>>(), ["Cargo: ##########"]);
    }
}
