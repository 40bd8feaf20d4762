//! Element-set record grouping.
//!
//! A category page is a plain-text stream where every three consecutive
//! lines form one record: the satellite identifier, then the two TLE data
//! lines. A trailing group of fewer than three lines is dropped.

use tracing::debug;

/// One satellite record: identifier plus its raw TLE pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Satellite identifier, e.g. `ISS (ZARYA)`
    pub name: String,
    /// First TLE data line
    pub line1: String,
    /// Second TLE data line
    pub line2: String,
}

/// A parsed category page: the complete three-line records it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    records: Vec<Record>,
}

impl ElementSet {
    /// Group a category page into records.
    ///
    /// Lines are trimmed of surrounding whitespace (catalog pages are CRLF
    /// terminated and identifiers are space padded). A trailing partial
    /// group is dropped.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();

        let mut chunks = lines.chunks_exact(3);
        let records = chunks
            .by_ref()
            .map(|group| Record {
                name: group[0].to_string(),
                line1: group[1].to_string(),
                line2: group[2].to_string(),
            })
            .collect();

        let dropped = chunks.remainder().len();
        if dropped > 0 {
            debug!("dropping trailing partial record group of {dropped} line(s)");
        }

        Self { records }
    }

    /// Satellite identifiers, one per record, in page order.
    pub fn satellite_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Find the first record with the given identifier.
    ///
    /// Duplicate identifiers later in the page are unreachable.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// All records in page order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of complete records on the page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the page contains no complete record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
