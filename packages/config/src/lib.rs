// ABOUTME: Configuration and environment variable management for Homees
// ABOUTME: Centralizes env var names and typed readers used across packages

pub mod constants;
pub mod env;

pub use constants::*;
pub use env::{env_string, env_u64_or};
