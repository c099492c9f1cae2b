//! Core functionality for savesora

pub mod metadata;
pub mod platform;
pub mod synthesizer;

pub use metadata::*;
pub use platform::*;
pub use synthesizer::*;
