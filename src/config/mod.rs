//! Configuration loading and management for the leave engine.
//!
//! This module loads the leave policy (accrual tiers, wage constants, expiry
//! window and withholding brackets) from YAML files, or supplies the built-in
//! statutory values.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/statutory").unwrap();
//! println!("Loaded policy: {}", config.policy().jurisdiction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccrualPolicy, ExpiryPolicy, LeavePolicy, PolicyFile, WagePolicy, WithholdingBracket,
    WithholdingFile,
};
