//! Fill and stroke styling for shapes.
//!
//! - [`ShapeStyle`]: fill paint, stroke paint and optional stroke width
//! - [`apply_shape_style!`](crate::apply_shape_style!): applies a style to any SVG element
//!
//! | Rust Property  | SVG Attribute  | Default   |
//! |----------------|----------------|-----------|
//! | `fill`         | `fill`         | `none`    |
//! | `stroke`       | `stroke`       | `black`   |
//! | `stroke_width` | `stroke-width` | (omitted) |

use crate::color::Paint;

/// Visual style of a rectangle or circle.
///
/// # Examples
///
/// ```
/// use easel_core::color::Paint;
/// use easel_core::draw::ShapeStyle;
///
/// let style = ShapeStyle::new()
///     .with_fill(Paint::new("green").unwrap())
///     .with_stroke(Paint::new("orange").unwrap())
///     .with_stroke_width(2.0);
/// assert_eq!(style.stroke_width(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    fill: Paint,
    stroke: Paint,
    stroke_width: Option<f32>,
}

impl ShapeStyle {
    /// Creates a style with no fill and a black stroke.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: Paint) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: Paint) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn set_fill(&mut self, fill: Paint) {
        self.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: Paint) {
        self.stroke = stroke;
    }

    /// Sets the stroke width; `None` leaves the attribute off so the SVG
    /// default of 1 applies.
    pub fn set_stroke_width(&mut self, width: Option<f32>) {
        self.stroke_width = width;
    }

    pub fn fill(&self) -> &Paint {
        &self.fill
    }

    pub fn stroke(&self) -> &Paint {
        &self.stroke
    }

    pub fn stroke_width(&self) -> Option<f32> {
        self.stroke_width
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Paint::None,
            stroke: Paint::black(),
            stroke_width: None,
        }
    }
}

/// Applies a [`ShapeStyle`] to an SVG element.
///
/// # Examples
///
/// ```
/// use easel_core::draw::ShapeStyle;
/// use svg::node::element as svg_element;
///
/// let style = ShapeStyle::default();
/// let rect = svg_element::Rectangle::new().set("width", 10).set("height", 10);
/// let rect = easel_core::apply_shape_style!(rect, &style);
/// ```
#[macro_export]
macro_rules! apply_shape_style {
    ($element:expr, $style:expr) => {{
        let mut elem = $element
            .set("fill", $style.fill().to_string())
            .set("stroke", $style.stroke().to_string());

        if let Some(width) = $style.stroke_width() {
            elem = elem.set("stroke-width", width);
        }

        elem
    }};
}
