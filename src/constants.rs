//! Fixed values for the store listing assets
//!
//! Canvas sizes, layout offsets and file names live here so the renderers
//! only carry drawing logic.

use crate::palettes::Rgb;

// =============================================================================
// OUTPUT
// =============================================================================

/// Directory that receives every generated file
pub const OUTPUT_DIR: &str = "play_store_assets";

/// Optional settings override read at startup
pub const SETTINGS_FILE: &str = "config/store_listing.json";

pub const ICON_FILE: &str = "app_icon.png";
pub const FEATURE_GRAPHIC_FILE: &str = "feature_graphic.png";
pub const PROMO_GRAPHIC_FILE: &str = "promo_graphic.png";
pub const TV_BANNER_FILE: &str = "tv_banner.png";

/// Total files written by one batch (icon, feature, 8 screenshots, promo, banner)
pub const ASSET_COUNT: usize = 4 + PHONE_SIZES.len() + TABLET_SIZES.len();

// =============================================================================
// SHARED COLORS (not part of the configurable palette)
// =============================================================================

pub const WHITE: Rgb = [255, 255, 255];
pub const BLACK: Rgb = [0, 0, 0];
pub const ACCENT_GREEN: Rgb = [52, 168, 83];
pub const DETAIL_GREY: Rgb = [100, 100, 100]; // Secondary card line
pub const FRAME_GREY: Rgb = [204, 204, 204]; // #CCCCCC phone bezel
pub const SCREEN_GREY: Rgb = [245, 245, 245];

// =============================================================================
// APP ICON
// =============================================================================

pub const ICON_SIZE: u32 = 512;
pub const ICON_CIRCLE_MARGIN: f32 = 0.1; // Fraction of the size on each side
pub const ICON_GLYPH_SCALE: f32 = 0.5; // Monogram px as a fraction of the size
pub const MONOGRAM_LIFT: f32 = 0.05; // Upward nudge as a fraction of the size

// =============================================================================
// FEATURE GRAPHIC
// =============================================================================

pub const FEATURE_WIDTH: u32 = 1024;
pub const FEATURE_HEIGHT: u32 = 500;
pub const FEATURE_ICON_SIZE: u32 = 100;
pub const FEATURE_ICON_POS: (i32, i32) = (50, 50);
pub const FEATURE_TITLE_POS: (i32, i32) = (180, 60);
pub const FEATURE_TAGLINE_POS: (i32, i32) = (180, 140);
pub const TITLE_PX: f32 = 72.0;
pub const TAGLINE_PX: f32 = 36.0;

pub const PHONE_WIDTH: u32 = 300;
pub const PHONE_HEIGHT: u32 = 600;
pub const PHONE_CORNER_RADIUS: f32 = 40.0;
pub const PHONE_FRAME_WIDTH: i32 = 5;
pub const PHONE_SCREEN_MARGIN: u32 = 20;
pub const PHONE_SCREEN_TOP: u32 = 40;
pub const PHONE_SCREEN_HEIGHT: u32 = 500;
pub const PHONE_HEADER_HEIGHT: u32 = 80;
pub const PHONE_ROW_COUNT: usize = 4;
pub const PHONE_ROW_ALPHA: u8 = 100;
/// Phone left edge measured from the right side of the feature graphic
pub const PHONE_RIGHT_INSET: u32 = 350;

// =============================================================================
// SCREENSHOTS
// =============================================================================

/// One screenshot target: (width, height, name suffix)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
    pub suffix: &'static str,
}

impl SizeSpec {
    pub const fn new(width: u32, height: u32, suffix: &'static str) -> Self {
        Self {
            width,
            height,
            suffix,
        }
    }
}

pub const PHONE_SIZES: [SizeSpec; 5] = [
    SizeSpec::new(1080, 1920, "phone"),       // Pixel / Galaxy class
    SizeSpec::new(1080, 2280, "tall_phone"),  // 19:9 panels
    SizeSpec::new(1170, 2532, "iphone"),      // iPhone 13/14 Pro
    SizeSpec::new(1242, 2208, "iphone_plus"), // iPhone 8 Plus
    SizeSpec::new(1440, 3120, "pixel_xl"),    // Pixel 6/7 Pro
];

pub const TABLET_SIZES: [SizeSpec; 3] = [
    SizeSpec::new(1600, 2560, "tablet"),
    SizeSpec::new(1536, 2048, "ipad"),
    SizeSpec::new(2048, 2732, "ipad_pro"), // 12.9"
];

pub const MIN_CARDS: u32 = 3;
pub const MAX_CARDS: u32 = 6;
pub const CARD_SLOT_PX: u32 = 200; // One card per this many px of height
pub const CARD_RADIUS: f32 = 15.0;
pub const CARD_OUTLINE_WIDTH: i32 = 2;
pub const CARD_BOTTOM_GAP: u32 = 10;
pub const TASK_FILL_ALPHA: u8 = 30;
pub const EVENT_FILL_ALPHA: u8 = 20;
pub const CARD_TITLE_OFFSET: u32 = 15;
pub const CARD_DETAIL_OFFSET: u32 = 50;

pub const TASK_SUBJECTS: [&str; 6] = [
    "math",
    "history",
    "science",
    "literature",
    "coding",
    "research",
];
pub const EVENT_TITLES: [&str; 5] = ["Lecture", "Study Group", "Exam", "Project Due", "Tutoring"];

// =============================================================================
// PROMO GRAPHIC
// =============================================================================

pub const PROMO_WIDTH: u32 = 180;
pub const PROMO_HEIGHT: u32 = 120;
pub const PROMO_TITLE_PX: f32 = 24.0;

// =============================================================================
// TV BANNER
// =============================================================================

pub const BANNER_WIDTH: u32 = 1280;
pub const BANNER_HEIGHT: u32 = 720;
pub const BANNER_ICON_SIZE: u32 = 300;
pub const BANNER_ICON_X: i32 = 100;
pub const BANNER_TEXT_X: i32 = 500;
pub const BANNER_WRAP_COLUMNS: usize = 40;
pub const BANNER_LINE_SPACING: i32 = 40;
