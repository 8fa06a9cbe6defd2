pub mod config;
pub mod constants;
pub mod error;
pub mod time;
pub mod types;

pub use config::SimConfig;
pub use error::ConfigError;
pub use time::Time;
pub use types::Vec3;
