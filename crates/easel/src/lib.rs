//! Easel - compose SVG documents from shapes, text and raster images.
//!
//! A [`DrawingRegistry`] holds named canvases. Callers append rectangles,
//! circles, text and images to a canvas by id, then write every canvas to
//! the SVG file named by its id.
//!
//! ```rust,no_run
//! use easel::{DrawingRegistry, draw::TextStyle, geometry::{Length, Point, Size}};
//!
//! let mut registry = DrawingRegistry::default();
//! registry.create_default("cover.svg")?;
//! registry.add_text("cover.svg", Point::new(100.0, 120.0), "Annual report", TextStyle::new())?;
//! registry.save_all()?;
//! # Ok::<(), easel::EaselError>(())
//! ```

pub mod config;
pub mod export;

mod drawing;
mod error;
mod registry;

pub use easel_core::{color, draw, geometry, raster};

pub use drawing::Drawing;
pub use error::EaselError;
pub use registry::DrawingRegistry;
