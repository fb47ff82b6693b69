//! Example: Composing a page programmatically
//!
//! This example builds a single A4 page with a title, a framed panel, a
//! wrapped paragraph and a generated gradient image, then writes it to
//! `compose_page.svg` in the working directory.

use easel::{
    DrawingRegistry,
    draw::{ShapeStyle, TextStyle, WrapOptions},
    geometry::{Length, Point, Size},
    raster::DynamicImage,
};
use image::{Rgb, RgbImage};

const PAGE: &str = "compose_page.svg";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = DrawingRegistry::default();
    registry.create_default(PAGE)?;

    let palette = registry.palette();
    let panel_fill = palette.resolve("light_blue")?;
    let panel_stroke = palette.resolve("dark_blue")?;
    let title_fill = palette.resolve("dark_blue_2")?;

    registry.add_text(
        PAGE,
        Point::new(100.0, 120.0),
        "Quarterly overview",
        TextStyle::new()
            .with_font_size(Length::px(48.0))
            .with_fill(title_fill.clone())
            .with_stroke(title_fill),
    )?;

    registry.add_rectangle(
        PAGE,
        Point::new(100.0, 180.0),
        Size::new(Length::new(1044.0), Length::new(400.0)),
        ShapeStyle::new()
            .with_fill(panel_fill)
            .with_stroke(panel_stroke)
            .with_stroke_width(3.0),
    )?;

    registry.add_wrapped_text(
        PAGE,
        Point::new(130.0, 230.0),
        "Shipments grew steadily through the quarter while returns held flat. \
         The chart below is generated in memory and embedded as a PNG so the \
         page stays a single self-contained file.",
        TextStyle::new(),
        WrapOptions::new(60, 28.0),
    )?;

    let gradient = RgbImage::from_fn(256, 64, |x, _| Rgb([x as u8, 96, 169]));
    registry.embed_raw_image_scaled(
        PAGE,
        Point::new(130.0, 380.0),
        Size::new(Length::px(512.0), Length::px(128.0)),
        &DynamicImage::ImageRgb8(gradient),
        true,
        1.0,
    )?;

    registry.save_all()?;
    println!("Wrote {PAGE}");

    Ok(())
}
