//! App icon: monogram on a primary disc over transparency

use image::RgbaImage;
use std::path::{Path, PathBuf};

use super::RenderContext;
use crate::constants::{
    ICON_CIRCLE_MARGIN, ICON_FILE, ICON_GLYPH_SCALE, ICON_SIZE, MONOGRAM_LIFT, WHITE,
};
use crate::error::AssetResult;
use crate::helpers::{SaveOptions, fill_circle, save_png};
use crate::palettes::{Rgb, opaque};
use crate::text::Pen;

pub fn render(ctx: &RenderContext) -> RgbaImage {
    let mut icon = RgbaImage::new(ICON_SIZE, ICON_SIZE);
    let radius = ICON_SIZE as f32 * (0.5 - ICON_CIRCLE_MARGIN);
    let pen = ctx.fonts.regular(ICON_SIZE as f32 * ICON_GLYPH_SCALE);
    draw_monogram(
        &mut icon,
        &ctx.metadata.monogram,
        ctx.palette.primary,
        pen,
        radius,
    );
    icon
}

pub fn write(ctx: &RenderContext, dir: &Path) -> AssetResult<PathBuf> {
    let path = dir.join(ICON_FILE);
    save_png(render(ctx), &path, SaveOptions::LOSSLESS_ALPHA)?;
    Ok(path)
}

/// Square transparent tile filled edge to edge by the monogram disc, for
/// pasting onto other graphics
pub fn monogram_disc(monogram: &str, fill: Rgb, pen: Pen, size: u32) -> RgbaImage {
    let mut disc = RgbaImage::new(size, size);
    draw_monogram(&mut disc, monogram, fill, pen, size as f32 / 2.0);
    disc
}

/// Disc of `radius` centered on the canvas with white lettering. The text is
/// centered on its ink bounds and lifted by a fixed fraction of the canvas,
/// since capitals without descenders otherwise sit visually low.
fn draw_monogram(canvas: &mut RgbaImage, monogram: &str, fill: Rgb, pen: Pen, radius: f32) {
    let (width, height) = canvas.dimensions();
    let center = (width as f32 / 2.0, height as f32 / 2.0);
    fill_circle(canvas, center.0, center.1, radius, opaque(fill));

    let lift = (width as f32 * MONOGRAM_LIFT).round() as i32;
    pen.draw_centered(canvas, opaque(WHITE), (0, 0, width, height), lift, monogram);
}
