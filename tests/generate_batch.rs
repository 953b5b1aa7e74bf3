//! End-to-end batch runs against a scratch directory

use std::fs;
use std::path::Path;

use store_assets::{
    ASSET_COUNT, Fonts, ListingSettings, PHONE_SIZES, TABLET_SIZES, run, run_with_fonts,
};

fn settings_in(dir: &Path) -> ListingSettings {
    ListingSettings::default().with_output_dir(dir.join("play_store_assets"))
}

#[test]
fn batch_writes_twelve_non_empty_files() {
    let scratch = tempfile::tempdir().unwrap();
    let settings = settings_in(scratch.path());

    let written = run(&settings).unwrap();
    assert_eq!(written.len(), 12);
    assert_eq!(ASSET_COUNT, 12);

    let entries: Vec<_> = fs::read_dir(&settings.output_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 12);
    for path in &entries {
        let len = fs::metadata(path).unwrap().len();
        assert!(len > 0, "{} is empty", path.display());
        image::open(path).unwrap();
    }
}

#[test]
fn screenshots_match_their_size_specs() {
    let scratch = tempfile::tempdir().unwrap();
    let settings = settings_in(scratch.path());
    run_with_fonts(&settings, &Fonts::builtin()).unwrap();

    let specs = PHONE_SIZES
        .iter()
        .map(|s| ("phone", s))
        .chain(TABLET_SIZES.iter().map(|s| ("tablet", s)));
    for (device, spec) in specs {
        let path = settings
            .output_dir
            .join(format!("screenshot_{}_{}.png", device, spec.suffix));
        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (spec.width, spec.height), "{}", path.display());
    }
}

#[test]
fn fixed_assets_have_fixed_sizes() {
    let scratch = tempfile::tempdir().unwrap();
    let settings = settings_in(scratch.path());
    run_with_fonts(&settings, &Fonts::builtin()).unwrap();

    let expected = [
        ("app_icon.png", (512, 512)),
        ("feature_graphic.png", (1024, 500)),
        ("promo_graphic.png", (180, 120)),
        ("tv_banner.png", (1280, 720)),
    ];
    for (name, size) in expected {
        let dims = image::image_dimensions(settings.output_dir.join(name)).unwrap();
        assert_eq!(dims, size, "{name}");
    }

    let icon = image::open(settings.output_dir.join("app_icon.png")).unwrap();
    assert!(icon.color().has_alpha());
    let feature = image::open(settings.output_dir.join("feature_graphic.png")).unwrap();
    assert!(!feature.color().has_alpha());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let fonts = Fonts::load();

    let a = run_with_fonts(&settings_in(first.path()), &fonts).unwrap();
    let b = run_with_fonts(&settings_in(second.path()), &fonts).unwrap();

    assert_eq!(a.len(), b.len());
    for (left, right) in a.iter().zip(&b) {
        assert_eq!(left.file_name(), right.file_name());
        assert_eq!(
            fs::read(left).unwrap(),
            fs::read(right).unwrap(),
            "{} differs between runs",
            left.display()
        );
    }
}

#[test]
fn decoded_files_keep_circle_and_gradient() {
    let scratch = tempfile::tempdir().unwrap();
    let settings = settings_in(scratch.path());
    run_with_fonts(&settings, &Fonts::builtin()).unwrap();
    let primary = settings.palette.primary;

    // Icon: opaque inside the 0.8-diameter circle, clear outside it
    let icon = image::open(settings.output_dir.join("app_icon.png"))
        .unwrap()
        .into_rgba8();
    let radius = 512.0 * 0.4;
    for (x, y, pixel) in icon.enumerate_pixels() {
        let dx = x as f32 + 0.5 - 256.0;
        let dy = y as f32 + 0.5 - 256.0;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= radius - 1.0 {
            assert_eq!(pixel[3], 255, "hole at ({x}, {y})");
        } else if dist >= radius + 1.0 {
            assert_eq!(pixel[3], 0, "spill at ({x}, {y})");
        }
    }
    assert_eq!(icon.get_pixel(60, 256).0, [primary[0], primary[1], primary[2], 255]);

    // Feature graphic: primary at the top edge, white at the bottom, never darker going down
    let feature = image::open(settings.output_dir.join("feature_graphic.png"))
        .unwrap()
        .into_rgb8();
    let height = feature.height();
    assert_eq!(feature.get_pixel(5, 0).0, primary);
    assert_eq!(feature.get_pixel(5, height - 1).0, [255, 255, 255]);
    for y in 1..height {
        let above = feature.get_pixel(5, y - 1);
        let here = feature.get_pixel(5, y);
        assert!((0..3).all(|c| here[c] >= above[c]), "darker at row {y}");
    }
}
