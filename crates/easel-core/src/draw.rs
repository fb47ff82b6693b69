//! Graphical elements that can be placed on a drawing.
//!
//! Every element knows how to build its own SVG node through the
//! [`Drawable`] trait. A drawing paints its elements in insertion order, so
//! later elements render on top of earlier ones.
//!
//! # Overview
//!
//! - [`Element`] - The tagged union stored in a drawing's element sequence
//! - [`Rectangle`], [`Circle`] - Basic shapes styled by [`ShapeStyle`]
//! - [`LinkedImage`], [`EmbeddedImage`] - Raster images by reference or inline
//! - [`TextBlock`] - Single-line or wrapped text styled by [`TextStyle`]

mod picture;
mod shape;
mod style;
mod text;

pub use picture::{EmbeddedImage, LinkedImage};
pub use shape::{Circle, Rectangle};
pub use style::ShapeStyle;
pub use text::{TextBlock, TextStyle, WrapOptions, wrap_lines};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Trait for elements that render to a single SVG node.
pub trait Drawable: std::fmt::Debug {
    /// Builds the SVG node for this element.
    fn render_to_svg(&self) -> SvgNode;
}

/// A graphical element stored in a drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rectangle(Rectangle),
    Circle(Circle),
    LinkedImage(LinkedImage),
    EmbeddedImage(EmbeddedImage),
    Text(TextBlock),
}

impl Element {
    /// Returns a short name for the element variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Circle(_) => "circle",
            Self::LinkedImage(_) => "linked_image",
            Self::EmbeddedImage(_) => "embedded_image",
            Self::Text(_) => "text",
        }
    }
}

impl Drawable for Element {
    fn render_to_svg(&self) -> SvgNode {
        match self {
            Self::Rectangle(rectangle) => rectangle.render_to_svg(),
            Self::Circle(circle) => circle.render_to_svg(),
            Self::LinkedImage(image) => image.render_to_svg(),
            Self::EmbeddedImage(image) => image.render_to_svg(),
            Self::Text(text) => text.render_to_svg(),
        }
    }
}

impl From<Rectangle> for Element {
    fn from(rectangle: Rectangle) -> Self {
        Self::Rectangle(rectangle)
    }
}

impl From<Circle> for Element {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<LinkedImage> for Element {
    fn from(image: LinkedImage) -> Self {
        Self::LinkedImage(image)
    }
}

impl From<EmbeddedImage> for Element {
    fn from(image: EmbeddedImage) -> Self {
        Self::EmbeddedImage(image)
    }
}

impl From<TextBlock> for Element {
    fn from(text: TextBlock) -> Self {
        Self::Text(text)
    }
}
