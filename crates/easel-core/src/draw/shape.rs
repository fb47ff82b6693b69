//! Rectangle and circle elements.

use svg::node::element as svg_element;

use crate::{
    apply_shape_style,
    draw::{Drawable, ShapeStyle, SvgNode},
    geometry::{Length, Point, Size},
};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    position: Point,
    size: Size,
    style: ShapeStyle,
}

impl Rectangle {
    pub fn new(position: Point, size: Size, style: ShapeStyle) -> Self {
        Self {
            position,
            size,
            style,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

impl Drawable for Rectangle {
    fn render_to_svg(&self) -> SvgNode {
        let rect = svg_element::Rectangle::new()
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("width", self.size.width())
            .set("height", self.size.height());

        Box::new(apply_shape_style!(rect, &self.style))
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: Length,
    style: ShapeStyle,
}

impl Circle {
    pub fn new(center: Point, radius: impl Into<Length>, style: ShapeStyle) -> Self {
        Self {
            center,
            radius: radius.into(),
            style,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }
}

impl Drawable for Circle {
    fn render_to_svg(&self) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius);

        Box::new(apply_shape_style!(circle, &self.style))
    }
}
