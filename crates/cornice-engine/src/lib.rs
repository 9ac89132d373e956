//! Cornice engine crate.
//!
//! Owns the corner profile math, the option-string request builder, the strip
//! decoration builder and the rendering ports that consume it.

pub mod coords;
pub mod decoration;
pub mod logging;
pub mod paint;
pub mod profile;
pub mod raster;
pub mod request;

pub use decoration::{decorate, uncorner, DecorationTarget};
pub use profile::{compute_profile, BorderProfile, EdgeEffect};
pub use request::{CornerRequest, Corners};
