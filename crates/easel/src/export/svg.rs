//! SVG file export.

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info, trace};
use svg::Document;

use easel_core::draw::Drawable;

use crate::{drawing::Drawing, export};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" ?>"#;

/// Writes each drawing as an SVG 1.1 file at the path named by its id.
///
/// Parent directories are not created.
#[derive(Debug, Default)]
pub struct SvgExporter;

impl SvgExporter {
    pub fn new() -> Self {
        Self
    }

    /// Builds the SVG document for a drawing.
    ///
    /// The root element carries the canvas size as `width`/`height` and
    /// declares the `xlink` namespace used by image elements.
    pub fn render_document(drawing: &Drawing) -> Document {
        let size = drawing.size();
        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
            .set("version", "1.1")
            .set("baseProfile", "full")
            .set("width", size.width())
            .set("height", size.height());

        for element in drawing.elements() {
            doc = doc.add(element.render_to_svg());
        }

        doc
    }

    /// Serializes a drawing to SVG text, including the XML declaration.
    pub fn render_to_string(drawing: &Drawing) -> String {
        let doc = Self::render_document(drawing);
        let rendered = format!("{XML_DECLARATION}\n{doc}\n");
        trace!(id = drawing.id(), svg = rendered.as_str(); "Rendered SVG document");
        rendered
    }

    /// Writes SVG text to the specified file
    fn write_document(&self, path: &Path, content: &str) -> Result<(), export::Error> {
        info!(path = path.display().to_string(); "Creating SVG file");

        let mut file = File::create(path).map_err(|err| {
            error!(path = path.display().to_string(), err:err; "Failed to create SVG file");
            export::Error::Io {
                path: path.to_path_buf(),
                source: err,
            }
        })?;

        file.write_all(content.as_bytes()).map_err(|err| {
            error!(path = path.display().to_string(), err:err; "Failed to write SVG content");
            export::Error::Io {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }
}

impl export::Exporter for SvgExporter {
    fn export_drawing(&mut self, drawing: &Drawing) -> Result<(), export::Error> {
        let content = Self::render_to_string(drawing);
        debug!(id = drawing.id(), elements = drawing.elements().len(); "SVG document rendered");

        self.write_document(drawing.path(), &content)
    }
}

#[cfg(test)]
mod tests {
    use easel_core::{
        draw::{Rectangle, ShapeStyle},
        geometry::{Length, Point, Size},
    };

    use super::*;
    use crate::export::Exporter;

    fn page(id: &str) -> Drawing {
        Drawing::new(id, Size::new(Length::new(1244.0), Length::px(1756.0)))
    }

    #[test]
    fn test_render_empty_document() {
        let rendered = SvgExporter::render_to_string(&page("page.svg"));

        assert!(rendered.starts_with("<?xml"));
        assert!(rendered.contains("<svg"));
        assert!(rendered.contains(r#"width="1244""#));
        assert!(rendered.contains(r#"height="1756px""#));
        assert!(rendered.contains(r#"version="1.1""#));
        assert!(rendered.contains(r#"xmlns:xlink="http://www.w3.org/1999/xlink""#));
        assert!(!rendered.contains("<rect"));
    }

    #[test]
    fn test_render_keeps_element_order() {
        let mut drawing = page("page.svg");
        for x in [10.0, 20.0, 30.0] {
            let size = Size::new(Length::new(5.0), Length::new(5.0));
            drawing.push(Rectangle::new(Point::new(x, 0.0), size, ShapeStyle::default()).into());
        }

        let rendered = SvgExporter::render_to_string(&drawing);
        let first = rendered.find(r#"x="10""#).unwrap();
        let second = rendered.find(r#"x="20""#).unwrap();
        let third = rendered.find(r#"x="30""#).unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.svg");
        let mut drawing = page(path.to_str().unwrap());
        let size = Size::new(Length::new(5.0), Length::new(5.0));
        drawing.push(Rectangle::new(Point::new(1.0, 2.0), size, ShapeStyle::default()).into());

        SvgExporter::new().export_drawing(&drawing).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<?xml"));
        assert!(written.contains("<svg"));
        assert!(written.contains("<rect"));
        assert!(written.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_export_empty_drawing_is_self_closing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.svg");
        let drawing = page(path.to_str().unwrap());

        SvgExporter::new().export_drawing(&drawing).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<svg"));
        assert!(written.trim_end().ends_with("/>"));
    }

    #[test]
    fn test_export_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.svg");
        let drawing = page(path.to_str().unwrap());

        let err = SvgExporter::new().export_drawing(&drawing).unwrap_err();
        let export::Error::Io { path: failed, .. } = err;
        assert_eq!(failed, path);
    }
}
