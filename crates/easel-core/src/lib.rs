//! Easel Core Types and Definitions
//!
//! This crate provides the building blocks for composing SVG drawings with
//! Easel. It includes:
//!
//! - **Geometry**: Positions, unit-carrying lengths and sizes ([`geometry`] module)
//! - **Colors**: Paint values and the symbolic color palette ([`color`] module)
//! - **Draw**: The graphical elements of a drawing and their SVG rendering ([`draw`] module)
//! - **Raster**: Image decoding, resampling and `data:` URI encoding ([`raster`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod raster;
