//! # Eris Site
//!
//! HTTP server for the Eris bot reference and marketing site.
//!
//! Serves the landing page, the command-reference data behind the
//! searchable commands page, the active site configuration, and the
//! Discord-invite redirect.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::*;
pub use router::*;
pub use state::*;
