//! Pixel geometry shared by the decoration builder and the raster port.
//!
//! Canonical space:
//! - Integer CSS pixels
//! - Origin top-left
//! - +X right, +Y down

mod insets;
mod rect;

pub use insets::Insets;
pub use rect::Rect;
