//! CelesTrak catalog access.
//!
//! This module covers everything between the remote catalog and the orbit
//! maths: fetching pages, scanning the index for category links, grouping
//! category pages into three-line records, and looking up a satellite's
//! TLE pair.

mod catalog;
mod client;
mod error;
mod index;
mod mock;
mod records;

pub use catalog::Catalog;
pub use client::{CelestrakClient, CelestrakConfig, DEFAULT_BASE_URL};
pub use error::CelestrakError;
pub use index::CategoryIndex;
pub use mock::MockCelestrak;
pub use records::{ElementSet, Record};

use std::future::Future;

/// Trait for fetching catalog pages.
///
/// This abstraction allows the index and record-locating logic to be tested
/// against local data instead of the live catalog.
pub trait CatalogSource {
    /// Absolute URL of the catalog index page.
    fn index_url(&self) -> &str;

    /// Fetch a single catalog page as text, read to completion.
    fn fetch_page(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<String, CelestrakError>> + Send;
}
