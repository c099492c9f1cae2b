//! Command line interface for savesora

pub mod args;
pub mod output;

pub use args::Args;
pub use output::OutputFormatter;
