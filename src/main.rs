//! Store listing asset generator
//!
//! Writes every listing image into the output directory in one pass.
//!
//! Usage:
//!   cargo run
//!
//! Settings are read from config/store_listing.json when present; otherwise
//! the built-in palette and app text are used.

use store_assets::{ListingSettings, generate};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let settings = ListingSettings::load();

    println!("Generating Play Store assets...\n");
    generate::run(&settings)?;
    println!(
        "\nAll assets have been generated in the '{}' directory.",
        settings.output_dir.display()
    );

    Ok(())
}
