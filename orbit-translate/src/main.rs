use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use orbit_translate::celestrak::{Catalog, CelestrakClient, CelestrakConfig};
use orbit_translate::cli::{Cli, Command};
use orbit_translate::domain::{OrbitalElements, Tle};
use orbit_translate::ssc::SscObject;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the requested listing
    // or ssc block.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = CelestrakConfig::new().with_base_url(&cli.base_url);
    let client = CelestrakClient::new(config)?;
    let catalog = Catalog::new(client);

    match cli.into_command()? {
        Command::ListCategories => {
            let names = catalog.categories().await?;
            println!("Available categories:");
            for name in names {
                println!("{name}");
            }
        }

        Command::ListSatellites { category } => {
            let names = catalog.satellites(&category).await?;
            println!("Available spacecraft in \"{category}\":");
            for name in names {
                println!("{name}");
            }
        }

        Command::Translate {
            category,
            satellite,
            mesh,
            radius,
            orientation,
        } => {
            let record = catalog.find_record(&category, &satellite).await?;
            let tle = Tle::parse(&record.line1, &record.line2)?;
            if let Some(epoch) = tle.epoch_datetime() {
                debug!("TLE epoch for {}: {epoch}", record.name);
            }

            let mut object = SscObject::new(record.name, OrbitalElements::from_tle(&tle));
            object.mesh = mesh;
            object.radius = radius;
            object.orientation = orientation;

            println!("{object}");
        }
    }

    Ok(())
}
