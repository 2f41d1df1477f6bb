//! IPSC tool configuration
//!
//! This crate provides configuration loading for the IPSC front-end tool:
//! - TOML configuration file parsing
//! - Tool configuration structures

pub mod tool_config;
pub mod toml_config;

pub use tool_config::*;
pub use toml_config::*;
