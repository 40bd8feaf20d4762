//! Category index.
//!
//! The catalog root is an HTML page whose anchor tags link to category
//! pages. The index page is not well-formed enough to justify a full HTML
//! parser; instead an explicit marker scanner walks the page, and every
//! captured href goes through a filter that keeps only data links.

use std::collections::HashMap;

use tracing::trace;

use super::CatalogSource;
use super::error::CelestrakError;

const HREF_START: &str = "<a href=\"";
const HREF_END: &str = "\">";

/// Iterator over the href attribute of every anchor tag in a page.
///
/// Scans for the `<a href="` marker and captures up to the closing `">`.
/// An unterminated href at the end of the page is discarded.
struct AnchorHrefs<'a> {
    rest: &'a str,
}

impl<'a> AnchorHrefs<'a> {
    fn new(html: &'a str) -> Self {
        Self { rest: html }
    }
}

impl<'a> Iterator for AnchorHrefs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(HREF_START)? + HREF_START.len();
        let after = &self.rest[start..];

        match after.find(HREF_END) {
            Some(end) => {
                self.rest = &after[end + HREF_END.len()..];
                Some(&after[..end])
            }
            None => {
                self.rest = "";
                None
            }
        }
    }
}

/// Derive a category name from a candidate link, or reject the link.
///
/// Links with a space, `@` or `#` are navigation or mailto noise, the
/// literal `master.php` is the catalog's search form, and anything in a
/// subdirectory is skipped except for the nested `satcat` listing. The name
/// is the link with its `.txt`/`.php` suffix and any `satcat/` path prefix
/// removed.
fn category_name(link: &str) -> Option<&str> {
    if link.contains(' ') || link.contains('@') || link.contains('#') {
        return None;
    }
    if link == "master.php" {
        return None;
    }
    if link.contains('/') && !link.contains("satcat") {
        return None;
    }

    let name = link
        .strip_suffix(".txt")
        .or_else(|| link.strip_suffix(".php"))
        .unwrap_or(link);
    let name = name
        .strip_prefix("/satcat/")
        .or_else(|| name.strip_prefix("satcat/"))
        .unwrap_or(name);

    Some(name)
}

/// Mapping from category name to the URL of its element-set page.
///
/// Built once per run by scanning the catalog index page; see
/// [`Catalog`](super::Catalog) for the fetch-once wrapper.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: HashMap<String, String>,
}

impl CategoryIndex {
    /// Fetch the index page from the source and scan it for categories.
    pub async fn fetch<S: CatalogSource>(source: &S) -> Result<Self, CelestrakError> {
        let base_url = source.index_url().to_string();
        let html = source.fetch_page(&base_url).await?;
        Ok(Self::from_html(&html, &base_url))
    }

    /// Scan an index page for category links.
    ///
    /// Later links win on a name collision, matching the catalog's own
    /// convention that a repeated link points at the same page.
    pub fn from_html(html: &str, base_url: &str) -> Self {
        let mut categories = HashMap::new();

        for link in AnchorHrefs::new(html) {
            match category_name(link) {
                Some(name) => {
                    categories.insert(name.to_string(), format!("{base_url}{link}"));
                }
                None => trace!("skipping link {link:?}"),
            }
        }

        Self { categories }
    }

    /// Category names, sorted for deterministic listing.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a category name to its element-set page URL.
    pub fn resolve(&self, name: &str) -> Result<&str, CelestrakError> {
        self.categories
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| CelestrakError::UnknownCategory(name.to_string()))
    }

    /// Number of categories in the index.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://celestrak.com/NORAD/elements/";

    fn index_of(links: &[&str]) -> CategoryIndex {
        let html: String = links
            .iter()
            .map(|l| format!("<li><a href=\"{l}\">{l}</a></li>\n"))
            .collect();
        CategoryIndex::from_html(&html, BASE)
    }

    #[test]
    fn scanner_captures_all_hrefs() {
        let html = "<p><a href=\"one.txt\">One</a> and <a href=\"two.php\">Two</a></p>";
        let hrefs: Vec<&str> = AnchorHrefs::new(html).collect();
        assert_eq!(hrefs, vec!["one.txt", "two.php"]);
    }

    #[test]
    fn scanner_discards_unterminated_href() {
        let html = "<a href=\"one.txt\">One</a><a href=\"trunca";
        let hrefs: Vec<&str> = AnchorHrefs::new(html).collect();
        assert_eq!(hrefs, vec!["one.txt"]);
    }

    #[test]
    fn scanner_handles_empty_page() {
        assert_eq!(AnchorHrefs::new("").count(), 0);
        assert_eq!(AnchorHrefs::new("no anchors here").count(), 0);
    }

    #[test]
    fn filtering_keeps_only_data_links() {
        let index = index_of(&[
            "satcat/x.txt",
            "master.php",
            "foo bar.txt",
            "weird#link",
            "stations.txt",
        ]);

        assert_eq!(index.len(), 2);
        assert!(index.resolve("stations").is_ok());
        assert!(index.resolve("x").is_ok());
        assert!(index.resolve("master").is_err());
    }

    #[test]
    fn rejects_mailto_and_subdirectories() {
        let index = index_of(&[
            "mailto:admin@celestrak.com",
            "docs/readme.txt",
            "supplemental/gps.txt",
        ]);
        assert!(index.is_empty());
    }

    #[test]
    fn name_derivation_strips_suffixes() {
        assert_eq!(category_name("stations.txt"), Some("stations"));
        assert_eq!(category_name("gps-ops.php"), Some("gps-ops"));
        assert_eq!(category_name("plain"), Some("plain"));
    }

    #[test]
    fn name_derivation_strips_satcat_prefix() {
        assert_eq!(category_name("satcat/geo.txt"), Some("geo"));
        assert_eq!(category_name("/satcat/geo.txt"), Some("geo"));
    }

    #[test]
    fn resolved_url_joins_base_and_link() {
        let index = index_of(&["stations.txt"]);
        assert_eq!(
            index.resolve("stations").unwrap(),
            "http://celestrak.com/NORAD/elements/stations.txt"
        );
    }

    #[test]
    fn last_link_wins_on_name_collision() {
        let index = index_of(&["stations.txt", "stations.php"]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.resolve("stations").unwrap(),
            "http://celestrak.com/NORAD/elements/stations.php"
        );
    }

    #[test]
    fn unknown_category_is_an_error() {
        let index = index_of(&["stations.txt"]);
        let err = index.resolve("nonsense").unwrap_err();
        assert!(matches!(err, CelestrakError::UnknownCategory(name) if name == "nonsense"));
    }

    #[test]
    fn names_are_sorted() {
        let index = index_of(&["weather.txt", "stations.txt", "amateur.txt"]);
        assert_eq!(index.names(), vec!["amateur", "stations", "weather"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The scanner never panics and every captured href is a substring
        /// of the input.
        #[test]
        fn scanner_total(html in ".{0,200}") {
            for href in AnchorHrefs::new(&html) {
                prop_assert!(html.contains(href));
            }
        }

        /// A derived name is always a substring of the link, and links with
        /// filtered characters are always rejected.
        #[test]
        fn derived_names_are_clean(link in "[a-z0-9./@# -]{1,30}") {
            match category_name(&link) {
                Some(name) => {
                    prop_assert!(link.contains(name));
                    prop_assert!(!link.contains(' '));
                    prop_assert!(!link.contains('@'));
                    prop_assert!(!link.contains('#'));
                }
                None => {}
            }
        }
    }
}
