//! # Eris Config
//!
//! Site configuration for the Eris reference website.
//!
//! This crate provides the `siteconfig.json` schema with its default
//! values, an explicit loader with a fall-back-to-defaults policy, and an
//! atomically swappable cache handed to the HTTP layer at startup.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;

pub use cache::*;
pub use loader::*;
pub use schema::*;
