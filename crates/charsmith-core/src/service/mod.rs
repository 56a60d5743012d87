//! Service-layer port traits shared across the wizard.

pub mod fs;
