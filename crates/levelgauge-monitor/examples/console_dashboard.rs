//! Console dashboard: drives a monitor against an in-memory ship and prints
//! the glyph gauges each tick.
//!
//! Run with `RUST_LOG=debug` to see classification and recovery logging.

use levelgauge_core::block::BlockKind;
use levelgauge_core::test_utils::{TestBlock, TestDirectory};
use levelgauge_monitor::{Monitor, TickOutcome};

fn main() {
    env_logger::init();

    let unit = TestBlock::new("Programmable Block", BlockKind::Other)
        .with_custom_data(
            r#"
[general]
ignore = "Spare"

[display]
panels = "Bridge LCD"
"#,
        )
        .shared();

    let hydrogen = TestBlock::gas_tank("Hydrogen Tank", "LargeHydrogenTank", 15_000_000.0, 0.9);
    let oxygen = TestBlock::gas_tank("Oxygen Tank", "OxygenTankSmall", 50_000.0, 0.3);
    let bridge = TestBlock::panel("Bridge LCD", "[inventory]\nmode = \"glyph\"\nsegments = 20");

    let directory = TestDirectory::with_blocks(&[
        TestBlock::container("Large Cargo Container", 421.875, 120.0, 3400.0, 57),
        TestBlock::container("Spare Cargo", 15.625, 15.625, 800.0, 9),
        hydrogen.clone(),
        oxygen.clone(),
        bridge.clone(),
    ]);

    let mut monitor = Monitor::new(directory, unit);

    for tick in 0..5 {
        hydrogen.set_fill(0.9 - 0.15 * tick as f64);
        oxygen.set_fill(0.3 + 0.1 * tick as f64);

        if tick == 3 {
            // Simulate the oxygen tank being ground down mid-session.
            oxygen.invalidate();
            monitor.directory().remove("Oxygen Tank");
        }

        let outcome = monitor.tick();
        println!("tick {tick}: {outcome:?}");
        if outcome == TickOutcome::Rendered {
            if let Some(frame) = bridge.last_frame() {
                for line in frame.texts() {
                    println!("  {line}");
                }
            }
        }
    }
}
