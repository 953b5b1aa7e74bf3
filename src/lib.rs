//! Store listing asset generator
//!
//! Procedurally draws the app icon, feature graphic, device screenshots, promo
//! graphic and TV banner for an app-store listing and writes them as PNGs.

pub mod constants;
pub mod error;
pub mod generate;
pub mod helpers;
pub mod metadata;
pub mod palettes;
pub mod settings;
pub mod text;

// Re-export commonly used types for convenience
pub use constants::{ASSET_COUNT, OUTPUT_DIR, PHONE_SIZES, SizeSpec, TABLET_SIZES};
pub use error::{AssetError, AssetResult};
pub use generate::screenshot::{CardKind, CardSlot, Device, ScreenshotLayout, item_count};
pub use generate::{RenderContext, run, run_with_fonts};
pub use metadata::AppMetadata;
pub use palettes::{Palette, Rgb};
pub use settings::ListingSettings;
pub use text::{FaceKind, Fonts, Pen, TextBounds, Typeface};
