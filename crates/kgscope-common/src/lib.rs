//! kgscope-common — Shared types, errors, and configuration used across all kgscope crates.

pub mod error;
pub mod concepts;
pub mod display;
pub mod settings;

// Re-export commonly used types
pub use concepts::{TypeColorMap, DEFAULT_CONCEPTS, PALETTE, UNDEFINED_COLOR};
pub use error::{KgscopeError, Result};
pub use settings::{LayoutStyle, ViewConfig, ViewSettings};
