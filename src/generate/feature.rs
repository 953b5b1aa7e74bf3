//! Feature graphic: gradient banner with icon, name, tagline and a phone mockup

use image::RgbaImage;
use std::path::{Path, PathBuf};

use super::RenderContext;
use super::icon::monogram_disc;
use crate::constants::*;
use crate::error::AssetResult;
use crate::helpers::{
    RoundedBox, SaveOptions, draw_rounded_box, fill_rect, paste, save_png, solid, vertical_gradient,
};
use crate::palettes::{opaque, translucent};

pub fn render(ctx: &RenderContext) -> RgbaImage {
    let palette = ctx.palette;
    let metadata = ctx.metadata;

    let mut feature = solid(FEATURE_WIDTH, FEATURE_HEIGHT, palette.background);
    vertical_gradient(&mut feature, palette.primary, WHITE);

    let icon_pen = ctx.fonts.regular(FEATURE_ICON_SIZE as f32 * ICON_GLYPH_SCALE);
    let icon = monogram_disc(&metadata.monogram, palette.primary, icon_pen, FEATURE_ICON_SIZE);
    paste(&mut feature, &icon, FEATURE_ICON_POS.0, FEATURE_ICON_POS.1);

    let (x, y) = FEATURE_TITLE_POS;
    ctx.fonts
        .bold(TITLE_PX)
        .draw(&mut feature, opaque(palette.text), x, y, &metadata.name);
    let (x, y) = FEATURE_TAGLINE_POS;
    ctx.fonts
        .regular(TAGLINE_PX)
        .draw(&mut feature, opaque(palette.secondary), x, y, &metadata.tagline);

    // Phone hangs off the top and bottom edges; paste clips it
    let phone = phone_mockup(ctx);
    let phone_x = (FEATURE_WIDTH - PHONE_RIGHT_INSET) as i32;
    let phone_y = FEATURE_HEIGHT as i32 / 2 - PHONE_HEIGHT as i32 / 2;
    paste(&mut feature, &phone, phone_x, phone_y);

    feature
}

pub fn write(ctx: &RenderContext, dir: &Path) -> AssetResult<PathBuf> {
    let path = dir.join(FEATURE_GRAPHIC_FILE);
    save_png(render(ctx), &path, SaveOptions::LOSSLESS)?;
    Ok(path)
}

/// White handset with a rounded bezel around a mock task list
fn phone_mockup(ctx: &RenderContext) -> RgbaImage {
    let mut phone = solid(PHONE_WIDTH, PHONE_HEIGHT, WHITE);
    let frame = RoundedBox::new(
        0,
        0,
        PHONE_WIDTH as i32 - 1,
        PHONE_HEIGHT as i32 - 1,
        PHONE_CORNER_RADIUS,
    );
    draw_rounded_box(&mut phone, frame, None, Some(opaque(FRAME_GREY)), PHONE_FRAME_WIDTH);

    let screen = phone_screen(ctx);
    paste(&mut phone, &screen, PHONE_SCREEN_MARGIN as i32, PHONE_SCREEN_TOP as i32);
    phone
}

fn phone_screen(ctx: &RenderContext) -> RgbaImage {
    let palette = ctx.palette;
    let screen_width = PHONE_WIDTH - 2 * PHONE_SCREEN_MARGIN;
    let pen = ctx.fonts.regular(TAGLINE_PX);

    let mut screen = solid(screen_width, PHONE_SCREEN_HEIGHT, SCREEN_GREY);
    fill_rect(&mut screen, 0, 0, screen_width, PHONE_HEADER_HEIGHT, palette.primary);
    pen.draw(&mut screen, opaque(WHITE), 20, 30, "My Tasks");

    for i in 0..PHONE_ROW_COUNT {
        let color = palette.card_color(i);
        let y = 100 + i as i32 * 90;
        let row = RoundedBox::new(20, y, screen_width as i32 - 20, y + 70, 10.0);
        draw_rounded_box(
            &mut screen,
            row,
            Some(translucent(color, PHONE_ROW_ALPHA)),
            Some(opaque(color)),
            1,
        );
        let label = format!("Task {}", i + 1);
        pen.draw(&mut screen, opaque(palette.text), 40, y + 20, &label);
    }

    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ListingSettings;
    use crate::text::Fonts;

    fn feature() -> (RgbaImage, ListingSettings) {
        let settings = ListingSettings::default();
        let fonts = Fonts::builtin();
        let image = render(&RenderContext::new(&settings, &fonts));
        (image, settings)
    }

    #[test]
    fn size_is_fixed() {
        assert_eq!(feature().0.dimensions(), (1024, 500));
    }

    #[test]
    fn gradient_runs_primary_to_white() {
        let (image, settings) = feature();
        let primary = settings.palette.primary;
        let top = image.get_pixel(5, 0);
        let bottom = image.get_pixel(5, FEATURE_HEIGHT - 1);
        assert_eq!(top.0, [primary[0], primary[1], primary[2], 255]);
        assert_eq!(bottom.0, [255, 255, 255, 255]);

        for y in 1..FEATURE_HEIGHT {
            let above = image.get_pixel(5, y - 1);
            let here = image.get_pixel(5, y);
            for c in 0..3 {
                assert!(here[c] >= above[c], "channel {c} drops at row {y}");
            }
        }
    }

    #[test]
    fn phone_frame_is_pasted_on_the_right() {
        let (image, _) = feature();
        // Left bezel of the phone; phone top sits 50 px above the canvas
        let bezel = image.get_pixel(FEATURE_WIDTH - PHONE_RIGHT_INSET + 2, 250);
        assert_eq!(bezel.0, [204, 204, 204, 255]);
    }

    #[test]
    fn icon_disc_sits_top_left() {
        let (image, settings) = feature();
        let primary = settings.palette.primary;
        // Left edge of the disc, centered vertically on it
        let p = image.get_pixel(53, 100);
        assert_eq!(p.0, [primary[0], primary[1], primary[2], 255]);
    }

    #[test]
    fn mockup_rows_are_translucent() {
        let settings = ListingSettings::default();
        let fonts = Fonts::builtin();
        let screen = phone_screen(&RenderContext::new(&settings, &fonts));
        assert_eq!(screen.dimensions(), (260, 500));
        // Inside the first row, left of its label
        let p = screen.get_pixel(25, 135);
        let primary = settings.palette.primary;
        assert_ne!(p.0, [primary[0], primary[1], primary[2], 255]);
        assert_ne!(p.0, [245, 245, 245, 255]);
    }
}
