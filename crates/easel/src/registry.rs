//! The drawing registry.

use std::{fs, path::Path};

use indexmap::IndexMap;
use log::{debug, info, warn};

use easel_core::{
    color::Palette,
    draw::{
        Circle, Element, EmbeddedImage, LinkedImage, Rectangle, ShapeStyle, TextBlock, TextStyle,
        WrapOptions,
    },
    geometry::{Length, PixelSize, Point, Size},
    raster::{
        DataUri, DynamicImage, ImageCodec, RasterCodec, RasterError, RasterFormat,
        ResizeOptions, mime_type_for_path,
    },
};

use crate::{
    EaselError,
    config::{AppConfig, UnknownDocumentPolicy},
    drawing::Drawing,
    export::{Exporter, svg::SvgExporter},
};

/// Holds named drawings and appends elements to them.
///
/// Every mutator takes the drawing id first. What happens when the id names
/// no drawing depends on [`UnknownDocumentPolicy`]: under the default
/// `Ignore` policy the call logs a warning and returns `Ok(())` without doing
/// any work.
///
/// # Examples
///
/// ```rust,no_run
/// use easel::{DrawingRegistry, draw::ShapeStyle, geometry::{Length, Point, Size}};
///
/// let mut registry = DrawingRegistry::default();
/// registry.create("page.svg", Size::new(Length::px(200.0), Length::px(100.0)))?;
///
/// let fill = registry.palette().resolve("light_blue")?;
/// registry.add_rectangle(
///     "page.svg",
///     Point::new(10.0, 10.0),
///     Size::new(Length::new(50.0), Length::new(20.0)),
///     ShapeStyle::new().with_fill(fill),
/// )?;
///
/// registry.save_all()?;
/// # Ok::<(), easel::EaselError>(())
/// ```
#[derive(Debug)]
pub struct DrawingRegistry {
    drawings: IndexMap<String, Drawing>,
    palette: Palette,
    default_size: Size,
    unknown_document: UnknownDocumentPolicy,
    codec: Box<dyn RasterCodec>,
    exporter: Box<dyn Exporter>,
}

impl DrawingRegistry {
    /// Creates an empty registry from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Config`] if a configured palette entry is not a
    /// valid color.
    pub fn new(config: &AppConfig) -> Result<Self, EaselError> {
        let palette = Palette::with_entries(config.palette().clone())
            .map_err(|err| EaselError::Config(format!("palette: {err}")))?;

        debug!(
            palette_entries = palette.len(),
            unknown_document:? = config.registry().unknown_document();
            "Registry configured"
        );

        Ok(Self {
            drawings: IndexMap::new(),
            palette,
            default_size: config.canvas().size(),
            unknown_document: config.registry().unknown_document(),
            codec: Box::new(ImageCodec::new()),
            exporter: Box::new(SvgExporter::new()),
        })
    }

    /// Replaces the raster codec used by the `embed_*` operations.
    pub fn with_codec(mut self, codec: impl RasterCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// Replaces the exporter used by [`save`](Self::save) and
    /// [`save_all`](Self::save_all).
    pub fn with_exporter(mut self, exporter: impl Exporter + 'static) -> Self {
        self.exporter = Box::new(exporter);
        self
    }

    /// Registers a new empty drawing.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::DuplicateDocument`] if `id` is already taken.
    pub fn create(&mut self, id: impl Into<String>, size: Size) -> Result<(), EaselError> {
        let id = id.into();
        if self.drawings.contains_key(&id) {
            return Err(EaselError::DuplicateDocument(id));
        }

        info!(id = id.as_str(), width:% = size.width(), height:% = size.height(); "Drawing created");
        self.drawings.insert(id.clone(), Drawing::new(id, size));
        Ok(())
    }

    /// Registers a new empty drawing with the configured default canvas size.
    pub fn create_default(&mut self, id: impl Into<String>) -> Result<(), EaselError> {
        self.create(id, self.default_size)
    }

    /// Appends a rectangle with its top-left corner at `position`.
    pub fn add_rectangle(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
        style: ShapeStyle,
    ) -> Result<(), EaselError> {
        self.append(id, "add_rectangle", Rectangle::new(position, size, style).into())
    }

    /// Appends a circle centered at `center`.
    pub fn add_circle(
        &mut self,
        id: &str,
        center: Point,
        radius: Length,
        style: ShapeStyle,
    ) -> Result<(), EaselError> {
        self.append(id, "add_circle", Circle::new(center, radius, style).into())
    }

    /// Appends an image referencing `href`. Nothing is read.
    pub fn link_image(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
        href: &str,
    ) -> Result<(), EaselError> {
        self.append(id, "link_image", LinkedImage::new(position, size, href).into())
    }

    /// Reads the file at `path` and embeds its bytes unchanged.
    ///
    /// The MIME type comes from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Io`] if the file cannot be read.
    pub fn embed_image(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
        path: impl AsRef<Path>,
    ) -> Result<(), EaselError> {
        if !self.resolve(id, "embed_image")? {
            return Ok(());
        }

        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let data = DataUri::encode(mime_type_for_path(path), &bytes);
        debug!(path = path.display().to_string(), bytes = bytes.len(); "Embedding image file");

        self.append(id, "embed_image", EmbeddedImage::new(position, size, data).into())
    }

    /// Reads and decodes the file at `path`, resizes it to `target_size`
    /// pixels, re-encodes it and embeds the result.
    ///
    /// The image is re-encoded in its detected format, falling back to JPEG
    /// when the format is unknown or the encoder rejects it.
    ///
    /// # Errors
    ///
    /// - [`EaselError::Geometry`] if `target_size` is not in pixels
    /// - [`EaselError::Io`] if the file cannot be read
    /// - [`EaselError::Raster`] if decoding or encoding fails
    pub fn embed_image_scaled(
        &mut self,
        id: &str,
        position: Point,
        target_size: Size,
        path: impl AsRef<Path>,
    ) -> Result<(), EaselError> {
        if !self.resolve(id, "embed_image_scaled")? {
            return Ok(());
        }

        let dimensions = target_size.to_pixels()?;
        if dimensions.is_empty() {
            return Err(RasterError::EmptyDimensions(dimensions).into());
        }

        let path = path.as_ref();
        let decoded = self.codec.decode(&fs::read(path)?)?;
        let resized = self.codec.resize(decoded.image(), dimensions);

        let format = decoded.format().unwrap_or(RasterFormat::Jpeg);
        let (format, bytes) = match self.codec.encode(&resized, format) {
            Ok(bytes) => (format, bytes),
            Err(err) if format != RasterFormat::Jpeg => {
                debug!(format:% = format, err:err; "Re-encoding as JPEG");
                (RasterFormat::Jpeg, self.codec.encode(&resized, RasterFormat::Jpeg)?)
            }
            Err(err) => return Err(err.into()),
        };

        let data = DataUri::encode(format.mime_type(), bytes);
        self.append(
            id,
            "embed_image_scaled",
            EmbeddedImage::new(position, target_size, data).into(),
        )
    }

    /// Encodes an in-memory image as PNG and embeds it.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Raster`] if encoding fails.
    pub fn embed_raw_image(
        &mut self,
        id: &str,
        position: Point,
        size: Size,
        image: &DynamicImage,
    ) -> Result<(), EaselError> {
        if !self.resolve(id, "embed_raw_image")? {
            return Ok(());
        }

        let bytes = self.codec.encode(image, RasterFormat::Png)?;
        let data = DataUri::encode(RasterFormat::Png.mime_type(), bytes);
        self.append(id, "embed_raw_image", EmbeddedImage::new(position, size, data).into())
    }

    /// Resizes an in-memory image, encodes it as PNG and embeds it.
    ///
    /// With `preserve_aspect`, the image is scaled uniformly to fit inside
    /// `target_size`; otherwise both axes are stretched to it. Either way the
    /// result is multiplied by `quality_factor`. The element is placed with
    /// `target_size` as its display size.
    ///
    /// # Errors
    ///
    /// - [`EaselError::Geometry`] if `target_size` is not in pixels
    /// - [`EaselError::Raster`] if the computed dimensions are empty, the
    ///   quality factor is not positive, or encoding fails
    pub fn embed_raw_image_scaled(
        &mut self,
        id: &str,
        position: Point,
        target_size: Size,
        image: &DynamicImage,
        preserve_aspect: bool,
        quality_factor: f32,
    ) -> Result<(), EaselError> {
        if !self.resolve(id, "embed_raw_image_scaled")? {
            return Ok(());
        }

        let target = target_size.to_pixels()?;
        let source = PixelSize::new(image.width(), image.height());
        let output = ResizeOptions::new(preserve_aspect, quality_factor)
            .output_dimensions(source, target)?;

        let resized = self.codec.resize(image, output);
        let bytes = self.codec.encode(&resized, RasterFormat::Png)?;
        let data = DataUri::encode(RasterFormat::Png.mime_type(), bytes);

        debug!(source:% = source, output:% = output; "Raw image resized");
        self.append(
            id,
            "embed_raw_image_scaled",
            EmbeddedImage::new(position, target_size, data).into(),
        )
    }

    /// Appends a single line of text with its baseline starting at `position`.
    pub fn add_text(
        &mut self,
        id: &str,
        position: Point,
        content: &str,
        style: TextStyle,
    ) -> Result<(), EaselError> {
        self.append(id, "add_text", TextBlock::single(position, content, style).into())
    }

    /// Appends text broken into lines by character count.
    pub fn add_wrapped_text(
        &mut self,
        id: &str,
        position: Point,
        content: &str,
        style: TextStyle,
        wrap: WrapOptions,
    ) -> Result<(), EaselError> {
        let block = TextBlock::wrapped(position, content, style, wrap);
        self.append(id, "add_wrapped_text", block.into())
    }

    /// Writes every drawing in creation order.
    ///
    /// # Errors
    ///
    /// Returns the first export failure; later drawings are not written.
    pub fn save_all(&mut self) -> Result<(), EaselError> {
        info!(drawings = self.drawings.len(); "Saving all drawings");
        for drawing in self.drawings.values() {
            self.exporter.export_drawing(drawing)?;
        }
        Ok(())
    }

    /// Writes one drawing.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::UnknownDocument`] if `id` names no drawing, or
    /// [`EaselError::Export`] if writing fails.
    pub fn save(&mut self, id: &str) -> Result<(), EaselError> {
        let drawing = self
            .drawings
            .get(id)
            .ok_or_else(|| EaselError::UnknownDocument(id.to_string()))?;

        info!(id; "Saving drawing");
        self.exporter.export_drawing(drawing)?;
        Ok(())
    }

    /// Serializes one drawing to SVG text without touching the filesystem.
    pub fn render_svg(&self, id: &str) -> Result<String, EaselError> {
        let drawing = self
            .drawing(id)
            .ok_or_else(|| EaselError::UnknownDocument(id.to_string()))?;
        Ok(SvgExporter::render_to_string(drawing))
    }

    /// Returns the canvas size recorded when `id` was created.
    pub fn get_canvas_size(&self, id: &str) -> Result<Size, EaselError> {
        self.drawing(id)
            .map(Drawing::size)
            .ok_or_else(|| EaselError::UnknownDocument(id.to_string()))
    }

    /// Looks up a named palette color.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::UnknownColor`] if the palette has no such entry.
    pub fn lookup_color(&self, name: &str) -> Result<&str, EaselError> {
        Ok(self.palette.lookup(name)?)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn drawing(&self, id: &str) -> Option<&Drawing> {
        self.drawings.get(id)
    }

    /// Returns drawing ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.drawings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.drawings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// Checks that `id` exists, applying the unknown-document policy.
    ///
    /// Returns `Ok(false)` when the call should be skipped.
    fn resolve(&self, id: &str, operation: &str) -> Result<bool, EaselError> {
        if self.drawings.contains_key(id) {
            return Ok(true);
        }

        match self.unknown_document {
            UnknownDocumentPolicy::Ignore => {
                warn!(id, operation; "Ignoring operation on unknown drawing");
                Ok(false)
            }
            UnknownDocumentPolicy::Error => Err(EaselError::UnknownDocument(id.to_string())),
        }
    }

    fn append(&mut self, id: &str, operation: &str, element: Element) -> Result<(), EaselError> {
        if !self.resolve(id, operation)? {
            return Ok(());
        }

        if let Some(drawing) = self.drawings.get_mut(id) {
            debug!(id, kind = element.kind(); "Element appended");
            drawing.push(element);
        }
        Ok(())
    }
}

impl Default for DrawingRegistry {
    fn default() -> Self {
        Self {
            drawings: IndexMap::new(),
            palette: Palette::standard(),
            default_size: AppConfig::default().canvas().size(),
            unknown_document: UnknownDocumentPolicy::default(),
            codec: Box::new(ImageCodec::new()),
            exporter: Box::new(SvgExporter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use easel_core::{color::Paint, geometry::Unit};
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        config::{CanvasConfig, RegistryConfig},
        export,
    };

    fn size(width: f32, height: f32) -> Size {
        Size::new(Length::new(width), Length::new(height))
    }

    fn strict() -> DrawingRegistry {
        let config = AppConfig::new(
            CanvasConfig::default(),
            RegistryConfig::new(UnknownDocumentPolicy::Error),
            Default::default(),
        );
        DrawingRegistry::new(&config).unwrap()
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingExporter {
        saved: Rc<RefCell<Vec<String>>>,
        fail_on: Option<String>,
    }

    impl Exporter for RecordingExporter {
        fn export_drawing(&mut self, drawing: &Drawing) -> Result<(), export::Error> {
            if self.fail_on.as_deref() == Some(drawing.id()) {
                return Err(export::Error::Io {
                    path: drawing.path().to_path_buf(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.saved.borrow_mut().push(drawing.id().to_string());
            Ok(())
        }
    }

    #[test]
    fn test_create_duplicate_fails() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(10.0, 10.0)).unwrap();

        let err = registry.create("a.svg", size(20.0, 20.0)).unwrap_err();
        assert!(matches!(err, EaselError::DuplicateDocument(id) if id == "a.svg"));
        assert_eq!(registry.get_canvas_size("a.svg").unwrap(), size(10.0, 10.0));
    }

    #[test]
    fn test_create_default_uses_configured_canvas() {
        let config = AppConfig::new(
            CanvasConfig::new(Length::px(300.0), Length::with_unit(2.0, Unit::In)),
            RegistryConfig::default(),
            Default::default(),
        );
        let mut registry = DrawingRegistry::new(&config).unwrap();
        registry.create_default("page.svg").unwrap();

        let canvas = registry.get_canvas_size("page.svg").unwrap();
        assert_eq!(canvas.width().to_string(), "300px");
        assert_eq!(canvas.height().to_string(), "2in");
    }

    #[test]
    fn test_get_canvas_size_unknown() {
        let registry = DrawingRegistry::default();
        let err = registry.get_canvas_size("missing.svg").unwrap_err();
        assert!(matches!(err, EaselError::UnknownDocument(_)));
    }

    #[test]
    fn test_elements_keep_call_order() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(100.0, 100.0)).unwrap();
        registry
            .add_rectangle("a.svg", Point::new(0.0, 0.0), size(5.0, 5.0), ShapeStyle::new())
            .unwrap();
        registry
            .add_circle("a.svg", Point::new(1.0, 1.0), Length::new(3.0), ShapeStyle::new())
            .unwrap();
        registry
            .add_text("a.svg", Point::new(2.0, 2.0), "hello", TextStyle::new())
            .unwrap();

        let kinds: Vec<_> = registry
            .drawing("a.svg")
            .unwrap()
            .elements()
            .iter()
            .map(Element::kind)
            .collect();
        assert_eq!(kinds, vec!["rectangle", "circle", "text"]);
    }

    #[test]
    fn test_unknown_id_ignored_by_default() {
        let mut registry = DrawingRegistry::default();
        registry
            .add_rectangle("nope.svg", Point::default(), size(1.0, 1.0), ShapeStyle::new())
            .unwrap();
        registry
            .embed_image("nope.svg", Point::default(), size(1.0, 1.0), "/no/such/file.png")
            .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_id_rejected_under_error_policy() {
        let mut registry = strict();
        let err = registry
            .link_image("nope.svg", Point::default(), size(1.0, 1.0), "x.png")
            .unwrap_err();
        assert!(matches!(err, EaselError::UnknownDocument(id) if id == "nope.svg"));
    }

    #[test]
    fn test_embed_image_missing_file() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(10.0, 10.0)).unwrap();
        let err = registry
            .embed_image("a.svg", Point::default(), size(1.0, 1.0), "/no/such/file.png")
            .unwrap_err();
        assert!(matches!(err, EaselError::Io(_)));
        assert!(registry.drawing("a.svg").unwrap().elements().is_empty());
    }

    #[test]
    fn test_embed_image_scaled_requires_pixels() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(10.0, 10.0)).unwrap();
        let target = Size::new(Length::with_unit(10.0, Unit::Mm), Length::new(10.0));
        let err = registry
            .embed_image_scaled("a.svg", Point::default(), target, "/no/such/file.png")
            .unwrap_err();
        assert!(matches!(err, EaselError::Geometry(_)));
    }

    #[test]
    fn test_embed_raw_image_scaled_preserves_aspect() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(400.0, 400.0)).unwrap();
        let image = DynamicImage::new_rgba8(200, 100);

        registry
            .embed_raw_image_scaled("a.svg", Point::default(), size(100.0, 100.0), &image, true, 1.0)
            .unwrap();

        let drawing = registry.drawing("a.svg").unwrap();
        let Element::EmbeddedImage(embedded) = &drawing.elements()[0] else {
            panic!("expected an embedded image");
        };
        assert_eq!(embedded.data().mime_type(), "image/png");
        let decoded = ImageCodec::new()
            .decode(&embedded.data().decode_payload().unwrap())
            .unwrap();
        assert_eq!(decoded.dimensions(), PixelSize::new(100, 50));
    }

    #[test]
    fn test_embed_raw_image_scaled_rejects_zero_quality() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(10.0, 10.0)).unwrap();
        let image = DynamicImage::new_rgb8(4, 4);

        let err = registry
            .embed_raw_image_scaled("a.svg", Point::default(), size(10.0, 10.0), &image, false, 0.0)
            .unwrap_err();
        assert!(matches!(err, EaselError::Raster(_)));
    }

    #[test]
    fn test_lookup_color() {
        let registry = DrawingRegistry::default();
        assert_eq!(registry.lookup_color("dark_blue").unwrap(), "rgb(0, 96, 169)");
        let err = registry.lookup_color("mauve").unwrap_err();
        assert!(matches!(err, EaselError::UnknownColor(name) if name == "mauve"));
    }

    #[test]
    fn test_configured_palette_entries() {
        let palette = [("accent".to_string(), "rgb(230, 80, 0)".to_string())].into();
        let config = AppConfig::new(CanvasConfig::default(), RegistryConfig::default(), palette);
        let registry = DrawingRegistry::new(&config).unwrap();
        assert_eq!(registry.lookup_color("accent").unwrap(), "rgb(230, 80, 0)");
        assert_eq!(
            registry.palette().resolve("accent").unwrap(),
            Paint::new("rgb(230, 80, 0)").unwrap()
        );
    }

    #[test]
    fn test_invalid_palette_entry_is_config_error() {
        let palette = [("accent".to_string(), "nonsense".to_string())].into();
        let config = AppConfig::new(CanvasConfig::default(), RegistryConfig::default(), palette);
        let err = DrawingRegistry::new(&config).unwrap_err();
        assert!(matches!(err, EaselError::Config(_)));
    }

    #[test]
    fn test_save_all_in_creation_order() {
        let exporter = RecordingExporter::default();
        let saved = Rc::clone(&exporter.saved);
        let mut registry = DrawingRegistry::default().with_exporter(exporter);
        for id in ["c.svg", "a.svg", "b.svg"] {
            registry.create(id, size(1.0, 1.0)).unwrap();
        }

        registry.save_all().unwrap();
        assert_eq!(*saved.borrow(), vec!["c.svg", "a.svg", "b.svg"]);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["c.svg", "a.svg", "b.svg"]);
    }

    #[test]
    fn test_save_all_stops_at_first_failure() {
        let exporter = RecordingExporter {
            fail_on: Some("b.svg".to_string()),
            ..Default::default()
        };
        let saved = Rc::clone(&exporter.saved);
        let mut registry = DrawingRegistry::default().with_exporter(exporter);
        for id in ["a.svg", "b.svg", "c.svg"] {
            registry.create(id, size(1.0, 1.0)).unwrap();
        }

        let err = registry.save_all().unwrap_err();
        assert!(matches!(err, EaselError::Export(_)));
        assert_eq!(*saved.borrow(), vec!["a.svg"]);
    }

    #[test]
    fn test_save_unknown_id() {
        let mut registry = DrawingRegistry::default();
        assert!(matches!(
            registry.save("missing.svg").unwrap_err(),
            EaselError::UnknownDocument(_)
        ));
    }

    #[test]
    fn test_render_svg_wrapped_text() {
        let mut registry = DrawingRegistry::default();
        registry.create("a.svg", size(200.0, 200.0)).unwrap();
        registry
            .add_wrapped_text(
                "a.svg",
                Point::new(10.0, 20.0),
                "aaaaa bbbbb ccccc",
                TextStyle::new(),
                WrapOptions::new(10, 24.0),
            )
            .unwrap();

        let Element::Text(block) = &registry.drawing("a.svg").unwrap().elements()[0] else {
            panic!("expected text");
        };
        assert_eq!(block.lines(), ["aaaaa bbbbb", "ccccc"]);
        assert_approx_eq!(f32, block.line_height().unwrap(), 24.0);

        let svg = registry.render_svg("a.svg").unwrap();
        assert_eq!(svg.matches("<tspan").count(), 2);
        assert!(svg.contains(r#"dy="24""#));
    }
}
