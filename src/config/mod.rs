//! Configuration loading and management for the Labour Engine.
//!
//! This module provides functionality to load analysis settings from a YAML
//! file. Without a file, [`AnalysisConfig::default`] applies.
//!
//! # Example
//!
//! ```no_run
//! use labour_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./labour-engine.yaml").unwrap();
//! println!("Shift row policy: {:?}", config.shift_row_policy);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AnalysisConfig, ShiftRowPolicy};
