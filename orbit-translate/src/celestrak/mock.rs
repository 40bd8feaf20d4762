//! Mock catalog for testing without network access.
//!
//! Serves an index page and category pages from a local directory as if
//! they were live catalog responses. Expects `index.html` plus one `.txt`
//! file per category page, named as the index page links to them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::CatalogSource;
use super::error::CelestrakError;

/// URL prefix under which mock pages are served.
const MOCK_BASE_URL: &str = "mock://celestrak/";

/// Catalog source backed by files in a local directory.
#[derive(Debug, Clone)]
pub struct MockCelestrak {
    index: String,
    pages: HashMap<String, String>,
}

impl MockCelestrak {
    /// Load a mock catalog from a directory.
    ///
    /// `index.html` is required; every `*.txt` file becomes a category page
    /// reachable as `mock://celestrak/<file name>`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, CelestrakError> {
        let data_dir = data_dir.as_ref();

        let index = fs::read_to_string(data_dir.join("index.html"))?;

        let mut pages = HashMap::new();
        for entry in fs::read_dir(data_dir)? {
            let path = entry?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)?;
            pages.insert(format!("{MOCK_BASE_URL}{file_name}"), content);
        }

        Ok(Self { index, pages })
    }
}

impl CatalogSource for MockCelestrak {
    fn index_url(&self) -> &str {
        MOCK_BASE_URL
    }

    async fn fetch_page(&self, url: &str) -> Result<String, CelestrakError> {
        if url == MOCK_BASE_URL {
            return Ok(self.index.clone());
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| CelestrakError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}
