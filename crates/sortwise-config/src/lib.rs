pub mod config;
pub mod discovery;
pub mod error;
pub mod scenario;
pub mod settings;
pub mod validation;

// Re-export main types
pub use config::*;
pub use error::*;
pub use scenario::*;
pub use settings::*;

pub use discovery::{host_profile, ConfigDiscovery, CONFIG_FILE, ENV_PREFIX};
pub use validation::validate;
