// ABOUTME: Core types, constants, and utilities for Homees
// ABOUTME: Foundational package providing shared vocabulary across all Homees packages

pub mod constants;
pub mod types;
pub mod validation;

// Re-export main types
pub use types::{DemandeStatut, UserRole};

// Re-export constants
pub use constants::{generate_id, tables};

// Re-export validation
pub use validation::ValidationError;
