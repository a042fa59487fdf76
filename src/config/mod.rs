//! Configuration management
//!
//! Explicit per-instance node settings (difficulty, mining reward) with
//! optional environment overrides.

pub mod settings;

pub use settings::Settings;
