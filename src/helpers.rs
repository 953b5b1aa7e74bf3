//! Canvas utilities shared by the renderers

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{AssetError, AssetResult};
use crate::palettes::{Rgb, lerp, opaque};

/// Source-over blend of `color` onto the pixel at (x, y); out of bounds is a no-op
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let dst = canvas.get_pixel_mut(x as u32, y as u32);
    *dst = over(*dst, color);
}

fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| {
        ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Alpha-composite `src` onto `dst` with its top-left corner at (x, y).
/// Parts falling outside `dst` are dropped.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, x: i32, y: i32) {
    imageops::overlay(dst, src, i64::from(x), i64::from(y));
}

/// Canvas filled with one color
pub fn solid(width: u32, height: u32, color: Rgb) -> RgbaImage {
    RgbaImage::from_pixel(width, height, opaque(color))
}

/// Opaque rectangle, clipped to the canvas
pub fn fill_rect(canvas: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
    if width == 0 || height == 0 {
        return;
    }
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), opaque(color));
}

/// Top-to-bottom blend; the first row is `from`, the last row is exactly `to`
pub fn vertical_gradient(canvas: &mut RgbaImage, from: Rgb, to: Rgb) {
    let (width, height) = canvas.dimensions();
    let span = height.saturating_sub(1).max(1) as f32;
    for y in 0..height {
        let color = lerp(from, to, y as f32 / span);
        fill_rect(canvas, 0, y as i32, width, 1, color);
    }
}

/// Left-to-right blend; the first column is `from`, the last column is exactly `to`
pub fn horizontal_gradient(canvas: &mut RgbaImage, from: Rgb, to: Rgb) {
    let (width, height) = canvas.dimensions();
    let span = width.saturating_sub(1).max(1) as f32;
    for x in 0..width {
        let color = lerp(from, to, x as f32 / span);
        fill_rect(canvas, x as i32, 0, 1, height, color);
    }
}

/// Anti-aliased filled disc. Coverage is measured from each pixel center, so
/// the edge fades over one pixel around `radius`.
pub fn fill_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let x0 = (cx - radius - 1.0).floor().max(0.0) as i32;
    let y0 = (cy - radius - 1.0).floor().max(0.0) as i32;
    let x1 = (cx + radius + 1.0).ceil() as i32;
    let y1 = (cy + radius + 1.0).ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let fx = x as f32 + 0.5 - cx;
            let fy = y as f32 + 0.5 - cy;
            let dist = (fx * fx + fy * fy).sqrt();
            let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
            if coverage > 0.0 {
                let alpha = (coverage * color[3] as f32).round() as u8;
                blend_pixel(canvas, x, y, Rgba([color[0], color[1], color[2], alpha]));
            }
        }
    }
}

/// Rectangle with rounded corners. Edges are inclusive pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: f32,
}

impl RoundedBox {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32, radius: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            radius,
        }
    }

    /// Whether the pixel center of (x, y) lies inside the shape
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let (l, t) = (self.left as f32, self.top as f32);
        let (r, b) = ((self.right + 1) as f32, (self.bottom + 1) as f32);
        if px < l || px > r || py < t || py > b {
            return false;
        }
        let radius = self.radius.min((r - l) / 2.0).min((b - t) / 2.0).max(0.0);
        let nx = px.clamp(l + radius, r - radius);
        let ny = py.clamp(t + radius, b - radius);
        let (dx, dy) = (px - nx, py - ny);
        dx * dx + dy * dy <= radius * radius
    }

    /// Shrink every edge by `by` px, keeping the corners concentric
    pub fn inset(&self, by: i32) -> Self {
        Self {
            left: self.left + by,
            top: self.top + by,
            right: self.right - by,
            bottom: self.bottom - by,
            radius: (self.radius - by as f32).max(0.0),
        }
    }

    fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }
}

/// Fill and/or outline a rounded box. The outline occupies the outer
/// `outline_width` px; the fill covers what is left inside it.
pub fn draw_rounded_box(
    canvas: &mut RgbaImage,
    shape: RoundedBox,
    fill: Option<Rgba<u8>>,
    outline: Option<Rgba<u8>>,
    outline_width: i32,
) {
    if shape.is_empty() {
        return;
    }
    let inner = match outline {
        Some(_) => shape.inset(outline_width),
        None => shape,
    };
    let x0 = shape.left.max(0);
    let y0 = shape.top.max(0);
    let x1 = shape.right.min(canvas.width() as i32 - 1);
    let y1 = shape.bottom.min(canvas.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            if !shape.contains(x, y) {
                continue;
            }
            let in_fill = !inner.is_empty() && inner.contains(x, y);
            match (in_fill, fill, outline) {
                (true, Some(color), _) => blend_pixel(canvas, x, y, color),
                (false, _, Some(color)) => blend_pixel(canvas, x, y, color),
                _ => {}
            }
        }
    }
}

/// How a finished canvas is written
#[derive(Debug, Clone, Copy)]
pub struct SaveOptions {
    /// Keep the alpha channel; otherwise the canvas is flattened to RGB
    pub keep_alpha: bool,
    pub compression: CompressionType,
}

impl SaveOptions {
    /// Graphics saved with the encoder's default settings
    pub const LOSSLESS: Self = Self {
        keep_alpha: false,
        compression: CompressionType::Default,
    };

    pub const LOSSLESS_ALPHA: Self = Self {
        keep_alpha: true,
        compression: CompressionType::Default,
    };

    /// Screenshots: fixed, maximum compression
    pub const COMPRESSED: Self = Self {
        keep_alpha: false,
        compression: CompressionType::Best,
    };
}

/// Encode `canvas` as PNG at `path`
pub fn save_png(canvas: RgbaImage, path: &Path, options: SaveOptions) -> AssetResult<()> {
    let file = File::create(path).map_err(|e| AssetError::io(path, e))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        options.compression,
        FilterType::Adaptive,
    );
    let (width, height) = canvas.dimensions();

    let result = if options.keep_alpha {
        encoder.write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)
    } else {
        let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();
        encoder.write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
    };
    result.map_err(|e| AssetError::image(path, e))
}
