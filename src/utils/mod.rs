//! Utility functions for savesora

pub mod filename;
pub mod hash;
pub mod url;

pub use filename::*;
pub use hash::*;
pub use url::*;
