//! Catalog context object.
//!
//! Bundles a [`CatalogSource`] with the category index so the index page is
//! fetched at most once per invocation. Category pages themselves are
//! re-fetched on every listing or lookup; the catalog keeps no other state.

use tokio::sync::OnceCell;

use super::error::CelestrakError;
use super::index::CategoryIndex;
use super::records::{ElementSet, Record};
use super::CatalogSource;

/// High-level catalog operations over any [`CatalogSource`].
pub struct Catalog<S> {
    source: S,
    index: OnceCell<CategoryIndex>,
}

impl<S: CatalogSource> Catalog<S> {
    /// Create a catalog over the given source. Nothing is fetched yet.
    pub fn new(source: S) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }

    /// The category index, fetched on first use.
    pub async fn index(&self) -> Result<&CategoryIndex, CelestrakError> {
        self.index
            .get_or_try_init(|| CategoryIndex::fetch(&self.source))
            .await
    }

    /// All category names, sorted.
    pub async fn categories(&self) -> Result<Vec<String>, CelestrakError> {
        let index = self.index().await?;
        Ok(index.names().into_iter().map(str::to_owned).collect())
    }

    /// All satellite identifiers in a category, in page order.
    pub async fn satellites(&self, category: &str) -> Result<Vec<String>, CelestrakError> {
        let set = self.fetch_element_set(category).await?;
        Ok(set.satellite_names().map(str::to_owned).collect())
    }

    /// Find a satellite's record (identifier plus TLE pair) in a category.
    pub async fn find_record(
        &self,
        category: &str,
        satellite: &str,
    ) -> Result<Record, CelestrakError> {
        let set = self.fetch_element_set(category).await?;
        set.find(satellite)
            .cloned()
            .ok_or_else(|| CelestrakError::SatelliteNotFound {
                satellite: satellite.to_string(),
                category: category.to_string(),
            })
    }

    async fn fetch_element_set(&self, category: &str) -> Result<ElementSet, CelestrakError> {
        let url = self.index().await?.resolve(category)?.to_string();
        let page = self.source.fetch_page(&url).await?;
        Ok(ElementSet::parse(&page))
    }
}
