//! Raster image elements.
//!
//! A [`LinkedImage`] points at an external path or URL that the SVG consumer
//! resolves; an [`EmbeddedImage`] carries its bytes inline as a `data:` URI.
//! Both render as an SVG 1.1 `<image>` with an `xlink:href` attribute.

use svg::node::element as svg_element;

use crate::{
    draw::{Drawable, SvgNode},
    geometry::{Point, Size},
    raster::DataUri,
};

/// An image whose source is resolved by whatever reads the SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedImage {
    position: Point,
    size: Size,
    href: String,
}

impl LinkedImage {
    pub fn new(position: Point, size: Size, href: impl Into<String>) -> Self {
        Self {
            position,
            size,
            href: href.into(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

impl Drawable for LinkedImage {
    fn render_to_svg(&self) -> SvgNode {
        Box::new(image_node(self.position, self.size, &self.href))
    }
}

/// An image stored inline as base64 data.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    position: Point,
    size: Size,
    data: DataUri,
}

impl EmbeddedImage {
    pub fn new(position: Point, size: Size, data: DataUri) -> Self {
        Self {
            position,
            size,
            data,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn data(&self) -> &DataUri {
        &self.data
    }
}

impl Drawable for EmbeddedImage {
    fn render_to_svg(&self) -> SvgNode {
        Box::new(image_node(self.position, self.size, &self.data.to_string()))
    }
}

fn image_node(position: Point, size: Size, href: &str) -> svg_element::Image {
    svg_element::Image::new()
        .set("x", position.x())
        .set("y", position.y())
        .set("width", size.width())
        .set("height", size.height())
        .set("xlink:href", href)
}
