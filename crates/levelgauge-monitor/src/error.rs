use levelgauge_core::block::BlockError;
use levelgauge_data::ConfigError;

/// Errors raised while initializing or updating a monitor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonitorError {
    /// Neither a search pattern nor panel names were configured.
    #[error(
        "Missing Displays. Add either a 'search' term or comma separated 'panels' in the configuration."
    )]
    ConfigurationMissing,

    /// An explicitly named display does not exist.
    #[error("Unable to add Text Panel: {name} returned no results.")]
    UnresolvedName { name: String },

    /// A resolved block cannot be drawn on.
    #[error("Unable to add Text Panel: {name} is not a text panel.")]
    NotDisplay { name: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Block(#[from] BlockError),
}

impl MonitorError {
    /// Whether this error stops the operation that raised it.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MonitorError::ConfigurationMissing)
    }
}
