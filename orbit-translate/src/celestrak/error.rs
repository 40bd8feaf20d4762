//! CelesTrak client error types.

/// Errors that can occur when fetching or resolving catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CelestrakError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog returned a non-success status
    #[error("catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Requested category is not present in the index
    #[error("unknown category {0:?} (run without arguments to list categories)")]
    UnknownCategory(String),

    /// No record in the category matches the requested identifier
    #[error("no spacecraft named {satellite:?} in category {category:?}")]
    SatelliteNotFound { satellite: String, category: String },

    /// Reading local catalog data failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CelestrakError::UnknownCategory("station".into());
        assert!(err.to_string().contains("unknown category \"station\""));

        let err = CelestrakError::Status {
            status: 503,
            url: "http://celestrak.com/NORAD/elements/".into(),
        };
        assert_eq!(
            err.to_string(),
            "catalog returned status 503 for http://celestrak.com/NORAD/elements/"
        );

        let err = CelestrakError::SatelliteNotFound {
            satellite: "ISS (ZARYA)".into(),
            category: "stations".into(),
        };
        assert!(err.to_string().contains("ISS (ZARYA)"));
        assert!(err.to_string().contains("stations"));
    }
}
