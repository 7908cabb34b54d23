//! Data source abstraction layer.
//!
//! This module defines the [`DataSource`] trait and the [`Catalog`] that
//! loads all five listing collections into a [`FeedSnapshot`].  Concrete
//! sources live in sub-modules: [`FileSource`] for the bundled JSON
//! fixtures and [`HttpSource`] for fixtures served over HTTP.
//!
//! ## For contributors: adding a new source
//!
//! 1. Create a new file in this directory (e.g. `s3.rs`).
//! 2. Define a struct and implement [`DataSource`] for it.  `fetch()` returns
//!    the raw JSON document; parsing is shared in [`catalog`].
//! 3. Add `mod s3;` below and re-export your struct in the `pub use` block.
//! 4. Teach [`Catalog::from_base`] when to pick it.
//!
//! [`FeedSnapshot`]: crate::feed::FeedSnapshot

pub mod catalog;
mod file;
mod http;

pub use catalog::{Catalog, LoadFailure, LoadReport};
pub use file::FileSource;
pub use http::HttpSource;

use crate::error::LoadError;

/// Trait that every data source must implement.
///
/// The poller calls [`fetch()`](DataSource::fetch) on a background thread,
/// so implementations must be [`Send`].
pub trait DataSource: Send {
    /// Human-readable label used in logs and status messages.
    fn name(&self) -> &str;

    /// Fetch the raw JSON document (an array of listings).
    fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}
