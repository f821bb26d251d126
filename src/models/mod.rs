pub mod config;
pub mod format;
pub mod shade;

pub use config::{ShadeConfig, DEFAULT_MULTIPLIERS};
pub use format::ColorFormat;
pub use shade::ShadeKey;
