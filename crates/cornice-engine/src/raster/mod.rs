//! Raster rendering port.
//!
//! [`Canvas`] is an in-memory box that accepts decorations like a DOM element
//! would and paints itself into an RGBA image.

mod canvas;
mod error;

pub use canvas::{BoxBorder, Canvas};
pub use error::RasterError;
