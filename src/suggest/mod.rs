//! AI content suggestion system for savesora

pub mod client;

pub use client::*;
