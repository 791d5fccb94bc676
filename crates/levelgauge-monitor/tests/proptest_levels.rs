//! Property-based tests for aggregation and gauge layout.

use levelgauge_core::block::BlockRef;
use levelgauge_core::inventory::ShipInventory;
use levelgauge_core::test_utils::*;
use levelgauge_core::surface::Viewport;
use levelgauge_render::{GlyphBar, PixelBar};
use proptest::prelude::*;
use std::sync::Arc;

// ===========================================================================
// Generators
// ===========================================================================

/// A tank or a container with consistent readings.
fn arb_block() -> impl Strategy<Value = Arc<TestBlock>> {
    prop_oneof![
        (0u32..10_000, 0u32..=100, any::<bool>()).prop_map(|(cap, pct, oxygen)| {
            let sub_kind = if oxygen { "OxygenTank" } else { "HydrogenTank" };
            TestBlock::gas_tank("Tank", sub_kind, cap as f64, pct as f64 / 100.0)
        }),
        (0u32..10_000, 0u32..=100, 0u32..5_000, 0u32..500).prop_map(|(max, pct, mass, items)| {
            let current = max as f64 * pct as f64 / 100.0;
            TestBlock::container("Cargo", max as f64, current, mass as f64, items)
        }),
    ]
}

fn levels_of(blocks: Vec<BlockRef>) -> levelgauge_core::level::Levels {
    let mut inventory = ShipInventory::new();
    inventory.classify(blocks);
    inventory.levels().unwrap()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Aggregation does not depend on block order.
    #[test]
    fn aggregation_is_order_independent(
        blocks in proptest::collection::vec(arb_block(), 0..20),
        seed in any::<u64>(),
    ) {
        let forward = refs(&blocks);
        let mut shuffled = forward.clone();
        // Deterministic rotation + reversal stands in for a permutation.
        if !shuffled.is_empty() {
            let k = (seed as usize) % shuffled.len();
            shuffled.rotate_left(k);
        }
        shuffled.reverse();
        prop_assert_eq!(levels_of(forward), levels_of(shuffled));
    }

    /// Consistent readings always give a percentage in [0, 100].
    #[test]
    fn percentage_stays_in_range(blocks in proptest::collection::vec(arb_block(), 0..20)) {
        let levels = levels_of(refs(&blocks));
        for level in [levels.cargo, levels.hydrogen, levels.oxygen] {
            let p = level.percentage();
            prop_assert!((0.0..=100.0001).contains(&p), "percentage {} out of range", p);
            if level.max_volume() == fixed(0.0) {
                prop_assert_eq!(p, 0.0);
            }
        }
    }

    /// Glyph gauges are always exactly `segments` glyphs long.
    #[test]
    fn glyph_gauge_has_fixed_length(p in -50.0f32..200.0, segments in 1u32..40) {
        let bar = GlyphBar::new(Viewport::default(), "#", "+", segments);
        prop_assert_eq!(bar.gauge(p).chars().count(), segments as usize);
    }

    /// Pixel fill never exceeds the bar.
    #[test]
    fn pixel_fill_fits_bar(p in -50.0f32..200.0, width in 0.0f32..2000.0) {
        let bar = PixelBar::new(Viewport {
            position: Default::default(),
            size: levelgauge_core::surface::Vec2::new(width, 100.0),
        });
        let fill = bar.fill(p);
        let drawn = fill.full_boxes as f32 * 20.0 + fill.partial.unwrap_or(0.0);
        prop_assert!(drawn <= bar.bar_max_width() + 0.001);
    }
}
