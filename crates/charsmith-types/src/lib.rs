//! Shared domain types for charsmith.
//!
//! This crate contains the character file model written by the wizard
//! (`CharacterRecord` and its nested settings, style, and example turns),
//! the wizard error type, and the global configuration shape.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod character;
pub mod config;
pub mod error;
