//! Command implementations for actiondocs-cli

pub mod inject;
pub mod render;

pub use inject::run_inject;
pub use render::run_render;
