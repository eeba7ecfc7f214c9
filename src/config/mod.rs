//! Configuration module for the cost estimator
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EstimatorPaths;
pub use settings::Settings;
