pub mod blob;
pub mod settings;

pub use blob::{ConfigBlob, ConfigError};
pub use settings::{GaugeMode, MonitorConfig, SurfaceSettings};
