//! Levelgauge Monitor -- the polling supervisor and output coordinator.
//!
//! [`Monitor`] owns the classified blocks and the configured displays, and
//! runs one sample-aggregate-render pass per [`Monitor::tick`]. When a tick
//! fails (usually because the host removed a block), the monitor rebuilds
//! its state once and reports further failures until a tick succeeds again.

pub mod display;
pub mod error;
pub mod monitor;

pub use display::Display;
pub use error::MonitorError;
pub use monitor::{Monitor, TickOutcome};
