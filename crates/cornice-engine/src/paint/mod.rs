//! Paint model shared between the decoration builder and rendering ports.
//!
//! Colors are premultiplied; ports that need straight bytes convert at the edge.

pub mod color;

pub use color::Color;
