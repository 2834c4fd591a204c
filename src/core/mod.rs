//! Core types and constants for the tactical overlay

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
