//! A single drawing canvas.

use std::path::Path;

use easel_core::{draw::Element, geometry::Size};

/// A canvas with a fixed size and an ordered list of elements.
///
/// The id doubles as the output path used by
/// [`SvgExporter`](crate::export::svg::SvgExporter). Elements paint in
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    id: String,
    size: Size,
    elements: Vec<Element>,
}

impl Drawing {
    /// Creates an empty drawing.
    pub fn new(id: impl Into<String>, size: Size) -> Self {
        Self {
            id: id.into(),
            size,
            elements: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the file path this drawing is saved to.
    pub fn path(&self) -> &Path {
        Path::new(&self.id)
    }

    /// Returns the canvas size recorded at creation.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }
}
