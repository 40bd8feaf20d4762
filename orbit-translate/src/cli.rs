//! Command-line surface.
//!
//! The flag combination selects one of three operations: list categories,
//! list the spacecraft in a category, or translate one spacecraft's TLE
//! into an ssc block. [`Cli::into_command`] validates the combination into
//! a typed [`Command`] so the rest of the program never sees half-formed
//! flag sets.

use clap::Parser;

use crate::celestrak::DEFAULT_BASE_URL;

/// Error returned when a spacecraft is requested without a category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "a satellite requires a category: pass --category as well \
     (run without arguments to list the available categories)"
)]
pub struct UsageError;

/// Generate Celestia-compatible ssc text from NORAD two-line element sets.
///
/// Run without arguments to list the available categories.
#[derive(Debug, Parser)]
#[command(name = "orbit-translate", version, about)]
pub struct Cli {
    /// Category to use; without --satellite, lists its spacecraft
    #[arg(short, long)]
    pub category: Option<String>,

    /// Spacecraft to translate; requires --category
    #[arg(short, long)]
    pub satellite: Option<String>,

    /// Mesh file for the generated object
    #[arg(short, long)]
    pub mesh: Option<String>,

    /// Radius of the object in kilometres
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Orientation, format "a b c d": angle in degrees plus the components
    /// of the rotation axis
    #[arg(short, long)]
    pub orientation: Option<String>,

    /// Catalog index URL to scrape
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print every category name in the index
    ListCategories,
    /// Print every spacecraft identifier in one category
    ListSatellites { category: String },
    /// Print the ssc block for one spacecraft
    Translate {
        category: String,
        satellite: String,
        mesh: Option<String>,
        radius: Option<f64>,
        orientation: Option<String>,
    },
}

impl Cli {
    /// Resolve the flag combination into a command.
    pub fn into_command(self) -> Result<Command, UsageError> {
        match (self.category, self.satellite) {
            (None, None) => Ok(Command::ListCategories),
            (Some(category), None) => Ok(Command::ListSatellites { category }),
            (Some(category), Some(satellite)) => Ok(Command::Translate {
                category,
                satellite,
                mesh: self.mesh,
                radius: self.radius,
                orientation: self.orientation,
            }),
            (None, Some(_)) => Err(UsageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("orbit-translate").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_lists_categories() {
        assert_eq!(parse(&[]).into_command(), Ok(Command::ListCategories));
    }

    #[test]
    fn category_alone_lists_satellites() {
        let command = parse(&["-c", "stations"]).into_command();
        assert_eq!(
            command,
            Ok(Command::ListSatellites {
                category: "stations".into()
            })
        );
    }

    #[test]
    fn category_and_satellite_translate() {
        let command = parse(&[
            "-c",
            "stations",
            "-s",
            "ISS (ZARYA)",
            "-m",
            "iss.3ds",
            "-r",
            "45",
            "-o",
            "[ 90 0 0 1 ]",
        ])
        .into_command();

        assert_eq!(
            command,
            Ok(Command::Translate {
                category: "stations".into(),
                satellite: "ISS (ZARYA)".into(),
                mesh: Some("iss.3ds".into()),
                radius: Some(45.0),
                orientation: Some("[ 90 0 0 1 ]".into()),
            })
        );
    }

    #[test]
    fn satellite_without_category_is_a_usage_error() {
        assert_eq!(
            parse(&["-s", "ISS (ZARYA)"]).into_command(),
            Err(UsageError)
        );
    }

    #[test]
    fn base_url_defaults_to_live_catalog() {
        assert_eq!(parse(&[]).base_url, DEFAULT_BASE_URL);
        assert_eq!(
            parse(&["--base-url", "http://localhost:8080/"]).base_url,
            "http://localhost:8080/"
        );
    }
}
