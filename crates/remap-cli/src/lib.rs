//! CLI library components for the material remapper.

pub mod logging;
pub mod render;
pub mod settings;
pub mod workspace;
