//! TV banner: dark horizontal gradient with a large monogram and stacked copy

use image::RgbaImage;
use std::path::{Path, PathBuf};

use super::RenderContext;
use super::icon::monogram_disc;
use crate::constants::*;
use crate::error::AssetResult;
use crate::helpers::{SaveOptions, horizontal_gradient, paste, save_png, solid};
use crate::palettes::opaque;
use crate::text::wrap;

/// Top of the first description line
fn description_top() -> i32 {
    (BANNER_HEIGHT as f32 / 1.7) as i32
}

pub fn render(ctx: &RenderContext) -> RgbaImage {
    let palette = ctx.palette;
    let metadata = ctx.metadata;

    let mut banner = solid(BANNER_WIDTH, BANNER_HEIGHT, BLACK);
    horizontal_gradient(&mut banner, palette.primary, BLACK);

    let icon_pen = ctx.fonts.bold((BANNER_ICON_SIZE / 2) as f32);
    let icon = monogram_disc(&metadata.monogram, palette.primary, icon_pen, BANNER_ICON_SIZE);
    let icon_y = (BANNER_HEIGHT - BANNER_ICON_SIZE) as i32 / 2;
    paste(&mut banner, &icon, BANNER_ICON_X, icon_y);

    let title = ctx.fonts.bold(TITLE_PX);
    let body = ctx.fonts.regular(TAGLINE_PX);
    let height = BANNER_HEIGHT as i32;

    title.draw(&mut banner, opaque(WHITE), BANNER_TEXT_X, height / 3, &metadata.name);
    body.draw(
        &mut banner,
        opaque(palette.secondary),
        BANNER_TEXT_X,
        height / 2,
        &metadata.tagline,
    );

    let lines = wrap(&metadata.description_text(), BANNER_WRAP_COLUMNS);
    for (i, line) in lines.iter().enumerate() {
        let y = description_top() + i as i32 * BANNER_LINE_SPACING;
        body.draw(&mut banner, opaque(WHITE), BANNER_TEXT_X, y, line);
    }

    banner
}

pub fn write(ctx: &RenderContext, dir: &Path) -> AssetResult<PathBuf> {
    let path = dir.join(TV_BANNER_FILE);
    save_png(render(ctx), &path, SaveOptions::LOSSLESS)?;
    Ok(path)
}
