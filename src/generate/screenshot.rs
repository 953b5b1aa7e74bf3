//! Screenshot renderer
//!
//! Draws a mock app screen (header bar plus alternating task and event cards)
//! at any target resolution. Layout is derived from the canvas size alone, so
//! every phone and tablet size shares one code path.

use image::RgbaImage;
use std::path::{Path, PathBuf};

use super::RenderContext;
use crate::constants::*;
use crate::error::{AssetError, AssetResult};
use crate::helpers::{RoundedBox, SaveOptions, draw_rounded_box, fill_rect, save_png, solid};
use crate::palettes::{opaque, translucent};
use crate::text::Pen;

/// Device class used in the output file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Phone,
    Tablet,
}

impl Device {
    pub fn label(self) -> &'static str {
        match self {
            Device::Phone => "phone",
            Device::Tablet => "tablet",
        }
    }
}

/// `screenshot_<device>_<suffix>.png`
pub fn file_name(device: Device, spec: &SizeSpec) -> String {
    format!("screenshot_{}_{}.png", device.label(), spec.suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Task,
    Event,
}

impl CardKind {
    /// Even slots are tasks, odd slots are calendar events
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            CardKind::Task
        } else {
            CardKind::Event
        }
    }
}

/// Vertical placement of one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub index: usize,
    pub kind: CardKind,
    pub top: u32,
    pub height: u32,
}

impl CardSlot {
    pub fn title(&self) -> String {
        match self.kind {
            CardKind::Task => format!(
                "Complete {}",
                TASK_SUBJECTS[self.index % TASK_SUBJECTS.len()]
            ),
            CardKind::Event => EVENT_TITLES[self.index % EVENT_TITLES.len()].to_string(),
        }
    }

    pub fn detail(&self) -> String {
        let i = self.index;
        match self.kind {
            CardKind::Task => format!("Due: {}/0{}/2025", i + 1, i + 1),
            CardKind::Event => format!("{}:00 AM - {}:00 AM", 9 + i, 10 + i),
        }
    }
}

/// Number of cards for a canvas height: one per 200 px, between 3 and 6
pub fn item_count(height: u32) -> u32 {
    (height / CARD_SLOT_PX).clamp(MIN_CARDS, MAX_CARDS)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotLayout {
    pub width: u32,
    pub height: u32,
    pub header_height: u32,
    pub margin: u32,
    pub cards: Vec<CardSlot>,
}

impl ScreenshotLayout {
    pub fn compute(width: u32, height: u32) -> AssetResult<Self> {
        if width == 0 || height == 0 {
            return Err(AssetError::InvalidSize { width, height });
        }

        let header_height = height / 8;
        let margin = width / 20;
        let content_top = header_height + margin;
        let count = item_count(height);
        let item_height = height.saturating_sub(content_top + margin * 2) / count;

        let cards = (0..count as usize)
            .map(|index| CardSlot {
                index,
                kind: CardKind::for_index(index),
                top: content_top + index as u32 * (item_height + margin / 2),
                height: item_height,
            })
            .collect();

        Ok(Self {
            width,
            height,
            header_height,
            margin,
            cards,
        })
    }

    /// Font size for the header title and card text
    pub fn text_px(&self) -> f32 {
        (self.header_height / 3) as f32
    }
}

pub fn render(ctx: &RenderContext, width: u32, height: u32) -> AssetResult<RgbaImage> {
    let layout = ScreenshotLayout::compute(width, height)?;
    let mut screenshot = solid(width, height, WHITE);

    fill_rect(&mut screenshot, 0, 0, width, layout.header_height, ctx.palette.primary);
    let pen = ctx.fonts.bold(layout.text_px());
    pen.draw_centered(
        &mut screenshot,
        opaque(WHITE),
        (0, 0, width, layout.header_height),
        0,
        &ctx.metadata.name,
    );

    for card in &layout.cards {
        draw_card(&mut screenshot, ctx, &layout, card, pen);
    }

    Ok(screenshot)
}

fn draw_card(
    canvas: &mut RgbaImage,
    ctx: &RenderContext,
    layout: &ScreenshotLayout,
    card: &CardSlot,
    pen: Pen,
) {
    let (color, fill_alpha) = match card.kind {
        CardKind::Task => (ctx.palette.card_color(card.index), TASK_FILL_ALPHA),
        CardKind::Event => (ctx.palette.secondary, EVENT_FILL_ALPHA),
    };

    let margin = layout.margin as i32;
    let top = card.top as i32;
    let bottom = top + card.height as i32 - CARD_BOTTOM_GAP as i32;
    let shape = RoundedBox::new(margin, top, layout.width as i32 - margin, bottom, CARD_RADIUS);
    draw_rounded_box(
        canvas,
        shape,
        Some(translucent(color, fill_alpha)),
        Some(opaque(color)),
        CARD_OUTLINE_WIDTH,
    );

    let text_x = margin * 2;
    pen.draw(
        canvas,
        opaque(ctx.palette.text),
        text_x,
        top + CARD_TITLE_OFFSET as i32,
        &card.title(),
    );
    pen.draw(
        canvas,
        opaque(DETAIL_GREY),
        text_x,
        top + CARD_DETAIL_OFFSET as i32,
        &card.detail(),
    );
}

pub fn write(
    ctx: &RenderContext,
    dir: &Path,
    device: Device,
    spec: &SizeSpec,
) -> AssetResult<PathBuf> {
    let path = dir.join(file_name(device, spec));
    let screenshot = render(ctx, spec.width, spec.height)?;
    save_png(screenshot, &path, SaveOptions::COMPRESSED)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ListingSettings;
    use crate::text::Fonts;

    #[test]
    fn item_count_clamps() {
        assert_eq!(item_count(1920), 6);
        assert_eq!(item_count(600), 3);
        assert_eq!(item_count(100), 3);
        assert_eq!(item_count(1000), 5);
        assert_eq!(item_count(3120), 6);
        for spec in PHONE_SIZES.iter().chain(TABLET_SIZES.iter()) {
            let expected = (spec.height / 200).clamp(3, 6);
            let layout = ScreenshotLayout::compute(spec.width, spec.height).unwrap();
            assert_eq!(layout.cards.len() as u32, expected);
        }
    }

    #[test]
    fn kinds_alternate_by_parity() {
        let layout = ScreenshotLayout::compute(1080, 1920).unwrap();
        let kinds: Vec<CardKind> = layout.cards.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CardKind::Task,
                CardKind::Event,
                CardKind::Task,
                CardKind::Event,
                CardKind::Task,
                CardKind::Event,
            ]
        );
    }

    #[test]
    fn layout_for_reference_phone() {
        let layout = ScreenshotLayout::compute(1080, 1920).unwrap();
        assert_eq!(layout.header_height, 240);
        assert_eq!(layout.margin, 54);
        // (1920 - 294 - 108) / 6
        assert_eq!(layout.cards[0].height, 253);
        assert_eq!(layout.cards[0].top, 294);
        assert_eq!(layout.cards[1].top, 294 + 253 + 27);
        assert_eq!(layout.text_px(), 80.0);
    }

    #[test]
    fn card_text() {
        let layout = ScreenshotLayout::compute(1080, 1920).unwrap();
        assert_eq!(layout.cards[0].title(), "Complete math");
        assert_eq!(layout.cards[0].detail(), "Due: 1/01/2025");
        assert_eq!(layout.cards[4].title(), "Complete coding");
        assert_eq!(layout.cards[1].title(), "Study Group");
        assert_eq!(layout.cards[1].detail(), "10:00 AM - 11:00 AM");
        assert_eq!(layout.cards[5].title(), "Lecture");
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            ScreenshotLayout::compute(0, 1920),
            Err(AssetError::InvalidSize { width: 0, .. })
        ));
        assert!(ScreenshotLayout::compute(1080, 0).is_err());
    }

    #[test]
    fn tiny_canvas_still_renders() {
        let settings = ListingSettings::default();
        let fonts = Fonts::builtin();
        let image = render(&RenderContext::new(&settings, &fonts), 40, 30).unwrap();
        assert_eq!(image.dimensions(), (40, 30));
    }

    #[test]
    fn file_names_follow_device_and_suffix() {
        assert_eq!(file_name(Device::Phone, &PHONE_SIZES[0]), "screenshot_phone_phone.png");
        assert_eq!(
            file_name(Device::Tablet, &TABLET_SIZES[2]),
            "screenshot_tablet_ipad_pro.png"
        );
    }

    #[test]
    fn rendered_cards_use_their_colors() {
        let settings = ListingSettings::default();
        let fonts = Fonts::builtin();
        let image = render(&RenderContext::new(&settings, &fonts), 1080, 1920).unwrap();
        let layout = ScreenshotLayout::compute(1080, 1920).unwrap();
        let primary = settings.palette.primary;
        let secondary = settings.palette.secondary;

        assert_eq!(*image.get_pixel(1, 1), opaque(primary));

        let task = layout.cards[0];
        let mid = task.top + task.height / 2;
        assert_eq!(*image.get_pixel(layout.margin, mid), opaque(primary));
        let tint = *image.get_pixel(layout.margin + 10, mid);
        assert_ne!(tint, opaque(WHITE));
        assert_ne!(tint, opaque(primary));

        let event = layout.cards[1];
        let mid = event.top + event.height / 2;
        assert_eq!(*image.get_pixel(layout.margin, mid), opaque(secondary));
    }
}
