//! # Eris Catalog
//!
//! Command catalog model, filtering, and display formatting for the Eris
//! site.
//!
//! This crate holds the static catalog of bot commands shown on the command
//! reference page, the search/category filtering that drives the page, and
//! the formatting helpers that turn raw argument and permission metadata
//! into display strings.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod category;
pub mod format;
pub mod types;

pub use catalog::*;
pub use category::*;
pub use format::*;
pub use types::*;
