//! CLI library components for draftlink.

pub mod commands;
pub mod logging;
pub mod types;
