//! Text rendering
//!
//! Fonts are probed from well-known system locations. A face that cannot be
//! found or parsed degrades to the built-in bitmap font; loading never fails.

pub mod builtin;

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories searched for scalable fonts, in order
const FONT_DIRS: [&str; 8] = [
    "C:\\Windows\\Fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
];

/// Which weight of the listing typeface to look up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Regular,
    Bold,
}

impl FaceKind {
    /// Preferred font file names, best match first
    pub fn file_names(self) -> &'static [&'static str] {
        match self {
            FaceKind::Regular => &[
                "arial.ttf",
                "Arial.ttf",
                "LiberationSans-Regular.ttf",
                "DejaVuSans.ttf",
            ],
            FaceKind::Bold => &[
                "arialbd.ttf",
                "Arial Bold.ttf",
                "LiberationSans-Bold.ttf",
                "DejaVuSans-Bold.ttf",
            ],
        }
    }

    /// Bare file names (resolved against the working directory) followed by
    /// every system directory
    pub fn candidates(self) -> Vec<PathBuf> {
        let names = self.file_names();
        let mut paths: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
        for dir in FONT_DIRS {
            paths.extend(names.iter().map(|name| Path::new(dir).join(name)));
        }
        paths
    }
}

/// A loaded scalable font, or the built-in bitmap fallback
pub enum Typeface {
    Outline(FontVec),
    Builtin,
}

impl Typeface {
    pub fn load(kind: FaceKind) -> Self {
        let face = Self::probe(kind.candidates());
        if face.is_builtin() {
            debug!("No scalable {:?} font found, using built-in glyphs", kind);
        }
        face
    }

    /// First candidate that reads and parses wins
    pub fn probe(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        paths
            .into_iter()
            .find_map(|path| {
                let bytes = fs::read(&path).ok()?;
                match Self::from_bytes(bytes) {
                    Some(face) => {
                        debug!("Loaded font {}", path.display());
                        Some(face)
                    }
                    None => {
                        debug!("Skipping unreadable font {}", path.display());
                        None
                    }
                }
            })
            .unwrap_or(Typeface::Builtin)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Option<Self> {
        FontVec::try_from_vec(bytes).ok().map(Typeface::Outline)
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }
}

/// Regular and bold faces shared by every renderer
pub struct Fonts {
    pub regular: Typeface,
    pub bold: Typeface,
}

impl Fonts {
    pub fn load() -> Self {
        Self {
            regular: Typeface::load(FaceKind::Regular),
            bold: Typeface::load(FaceKind::Bold),
        }
    }

    /// Bitmap glyphs only; output does not depend on installed fonts
    pub fn builtin() -> Self {
        Self {
            regular: Typeface::Builtin,
            bold: Typeface::Builtin,
        }
    }

    pub fn regular(&self, px: f32) -> Pen<'_> {
        Pen::new(&self.regular, px)
    }

    pub fn bold(&self, px: f32) -> Pen<'_> {
        Pen::new(&self.bold, px)
    }
}

/// Ink extent of a string relative to the point it is drawn at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A typeface at a fixed pixel size
#[derive(Clone, Copy)]
pub struct Pen<'a> {
    face: &'a Typeface,
    px: f32,
}

impl<'a> Pen<'a> {
    pub fn new(face: &'a Typeface, px: f32) -> Self {
        Self { face, px }
    }

    pub fn measure(&self, text: &str) -> TextBounds {
        match self.face {
            Typeface::Outline(font) => outline_bounds(font, PxScale::from(self.px), text),
            Typeface::Builtin => {
                let (width, height) = builtin::measure(text, builtin::scale_for(self.px));
                TextBounds {
                    x: 0,
                    y: 0,
                    width,
                    height,
                }
            }
        }
    }

    /// Draw with the top of the line box at (x, y)
    pub fn draw(&self, canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
        match self.face {
            Typeface::Outline(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(self.px), font, text)
            }
            Typeface::Builtin => {
                builtin::draw(canvas, color, x, y, builtin::scale_for(self.px), text)
            }
        }
    }

    /// Center the ink of `text` inside the area, then raise it by `lift` px
    pub fn draw_centered(
        &self,
        canvas: &mut RgbaImage,
        color: Rgba<u8>,
        area: (i32, i32, u32, u32),
        lift: i32,
        text: &str,
    ) {
        let bounds = self.measure(text);
        let (x, y) = centered_origin(bounds, area, lift);
        self.draw(canvas, color, x, y, text);
    }
}

/// Draw origin that places `bounds` centered in `area`, raised by `lift`
pub fn centered_origin(bounds: TextBounds, area: (i32, i32, u32, u32), lift: i32) -> (i32, i32) {
    let (ax, ay, aw, ah) = area;
    let ink_x = ax + (aw as i32 - bounds.width as i32).div_euclid(2);
    let ink_y = ay + (ah as i32 - bounds.height as i32).div_euclid(2) - lift;
    (ink_x - bounds.x, ink_y - bounds.y)
}

/// Union of glyph pixel bounds, laid out the same way `draw_text_mut` places
/// glyphs (caret from 0, baseline at the ascent)
fn outline_bounds(font: &FontVec, scale: PxScale, text: &str) -> TextBounds {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous = None;
    let mut extent: Option<(f32, f32, f32, f32)> = None;

    for c in text.chars() {
        let id = scaled.glyph_id(c);
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        if let Some(prev) = previous {
            caret += scaled.kern(id, prev);
        }
        previous = Some(id);

        let bb = outlined.px_bounds();
        let min_x = bb.min.x.round();
        let min_y = bb.min.y.round();
        let max_x = min_x + bb.width();
        let max_y = min_y + bb.height();
        extent = Some(match extent {
            None => (min_x, min_y, max_x, max_y),
            Some((x0, y0, x1, y1)) => (x0.min(min_x), y0.min(min_y), x1.max(max_x), y1.max(max_y)),
        });
    }

    match extent {
        Some((x0, y0, x1, y1)) => TextBounds {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0).ceil() as u32,
            height: (y1 - y0).ceil() as u32,
        },
        None => TextBounds::default(),
    }
}

/// Greedy paragraph fill: whitespace (line breaks included) collapses to
/// single spaces, words are packed into lines of at most `width` chars and
/// longer words are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + chars.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while current_len == 0 && chars.len() > width {
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += chars.len();
        current.extend(chars);
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
