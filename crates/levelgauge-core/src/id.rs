use serde::{Deserialize, Serialize};

/// Identifies a construct (a group of mechanically connected blocks).
///
/// Blocks are only monitored or drawn on when they share the construct of
/// the monitoring unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstructId(pub u64);
