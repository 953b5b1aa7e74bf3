//! Promo graphic: app name on a solid primary tile

use image::RgbaImage;
use std::path::{Path, PathBuf};

use super::RenderContext;
use crate::constants::{PROMO_GRAPHIC_FILE, PROMO_HEIGHT, PROMO_TITLE_PX, PROMO_WIDTH, WHITE};
use crate::error::AssetResult;
use crate::helpers::{SaveOptions, save_png, solid};
use crate::palettes::opaque;

pub fn render(ctx: &RenderContext) -> RgbaImage {
    let mut promo = solid(PROMO_WIDTH, PROMO_HEIGHT, ctx.palette.primary);
    ctx.fonts.bold(PROMO_TITLE_PX).draw_centered(
        &mut promo,
        opaque(WHITE),
        (0, 0, PROMO_WIDTH, PROMO_HEIGHT),
        0,
        &ctx.metadata.name,
    );
    promo
}

pub fn write(ctx: &RenderContext, dir: &Path) -> AssetResult<PathBuf> {
    let path = dir.join(PROMO_GRAPHIC_FILE);
    save_png(render(ctx), &path, SaveOptions::LOSSLESS)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ListingSettings;
    use crate::text::Fonts;

    #[test]
    fn name_is_centered_on_primary() {
        let settings = ListingSettings::default();
        let fonts = Fonts::builtin();
        let promo = render(&RenderContext::new(&settings, &fonts));
        assert_eq!(promo.dimensions(), (180, 120));

        let primary = settings.palette.primary;
        assert_eq!(promo.get_pixel(0, 0).0, [primary[0], primary[1], primary[2], 255]);

        // White ink must be balanced around the horizontal center
        let white: Vec<u32> = promo
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0 == [255, 255, 255, 255])
            .map(|(x, _, _)| x)
            .collect();
        assert!(!white.is_empty());
        let left = *white.iter().min().unwrap();
        let right = *white.iter().max().unwrap();
        assert!((left as i32 - (179 - right) as i32).abs() <= 1);
    }
}
