//! Business logic and port trait definitions for charsmith.
//!
//! This crate defines the "ports" the wizard talks through (`LineSource` for
//! interactive input, `FileSystem` for the final write) and the logic that
//! drives them. It depends only on `charsmith-types` -- never on
//! `charsmith-infra` or any terminal crate.

pub mod service;
pub mod wizard;

#[cfg(test)]
pub(crate) mod test_support;
