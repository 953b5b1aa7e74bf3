//! Asset generation modules
//!
//! One renderer per listing asset:
//! - App icon (512x512, transparent)
//! - Feature graphic with a phone mockup
//! - Screenshots at every phone and tablet size
//! - Promo graphic
//! - TV banner

pub mod banner;
pub mod feature;
pub mod icon;
pub mod promo;
pub mod screenshot;

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{ASSET_COUNT, PHONE_SIZES, TABLET_SIZES};
use crate::error::{AssetError, AssetResult};
use crate::metadata::AppMetadata;
use crate::palettes::Palette;
use crate::settings::ListingSettings;
use crate::text::Fonts;
use screenshot::Device;

/// Read-only inputs shared by every renderer
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub palette: &'a Palette,
    pub metadata: &'a AppMetadata,
    pub fonts: &'a Fonts,
}

impl<'a> RenderContext<'a> {
    pub fn new(settings: &'a ListingSettings, fonts: &'a Fonts) -> Self {
        Self {
            palette: &settings.palette,
            metadata: &settings.metadata,
            fonts,
        }
    }
}

/// Render every asset into `settings.output_dir` using system fonts when
/// available. Returns the written paths in batch order.
pub fn run(settings: &ListingSettings) -> AssetResult<Vec<PathBuf>> {
    let fonts = Fonts::load();
    run_with_fonts(settings, &fonts)
}

/// Same as [`run`] with caller-supplied fonts. Stops at the first failure;
/// files written before it stay on disk.
pub fn run_with_fonts(settings: &ListingSettings, fonts: &Fonts) -> AssetResult<Vec<PathBuf>> {
    let dir = settings.output_dir.as_path();
    fs::create_dir_all(dir).map_err(|e| AssetError::io(dir, e))?;

    let ctx = RenderContext::new(settings, fonts);
    let mut written = Vec::with_capacity(ASSET_COUNT);

    written.push(created(icon::write(&ctx, dir)?));
    written.push(created(feature::write(&ctx, dir)?));
    write_screenshots(&ctx, dir, &mut written)?;
    written.push(created(promo::write(&ctx, dir)?));
    written.push(created(banner::write(&ctx, dir)?));

    Ok(written)
}

fn write_screenshots(
    ctx: &RenderContext,
    dir: &Path,
    written: &mut Vec<PathBuf>,
) -> AssetResult<()> {
    let targets = PHONE_SIZES
        .iter()
        .map(|spec| (Device::Phone, spec))
        .chain(TABLET_SIZES.iter().map(|spec| (Device::Tablet, spec)));

    for (device, spec) in targets {
        written.push(created(screenshot::write(ctx, dir, device, spec)?));
    }
    Ok(())
}

fn created(path: PathBuf) -> PathBuf {
    println!("Created: {}", path.display());
    path
}
