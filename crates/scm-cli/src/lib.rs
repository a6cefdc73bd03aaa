//! CLI library components for the context menu host.

pub mod config;
pub mod logging;
pub mod render;
