//! # Eris Common
//!
//! Shared error types and text utilities for the Eris site workspace.
//!
//! This crate provides the foundational error type and small string helpers
//! used across the other crates in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod text;

pub use error::*;
pub use text::*;
