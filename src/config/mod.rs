//! Configuration module for taxcost
//!
//! - Config directory resolution
//! - Read-only user settings (locale override, log file)

pub mod paths;
pub mod settings;

pub use paths::TaxCostPaths;
pub use settings::Settings;
