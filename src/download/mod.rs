//! Download system for savesora

pub mod downloader;

pub use downloader::*;
