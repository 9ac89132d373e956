//! Corner requests: what to decorate and how.
//!
//! A [`CornerRequest`] is built either programmatically or from a free-form
//! option string such as `"bite 12px top cc:#335"`. Parsing never fails;
//! malformed pieces fall back to defaults.

mod corners;
mod parse;

pub use corners::{Corners, Edge};

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::paint::Color;
use crate::profile::{compute_profile, effective_width, BorderProfile, EdgeEffect, DEFAULT_WIDTH};

/// Normalized decoration request.
///
/// Invariants: `width > 0`, `corners` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerRequest {
    effect: EdgeEffect,
    width: u32,
    corners: Corners,
    keep_border: bool,
    corner_color: Option<Color>,
    strip_color: Option<Color>,
}

impl Default for CornerRequest {
    fn default() -> Self {
        Self::new(EdgeEffect::Round, DEFAULT_WIDTH)
    }
}

impl CornerRequest {
    /// All four corners, border removed, inherited colors.
    pub fn new(effect: EdgeEffect, width: u32) -> Self {
        Self {
            effect,
            width: effective_width(width),
            corners: Corners::all(),
            keep_border: false,
            corner_color: None,
            strip_color: None,
        }
    }

    /// Parses a free-form option string. See the module docs.
    pub fn parse(options: &str) -> Self {
        parse::parse_options(options)
    }

    /// Selects `corners`; an empty set selects all four.
    pub fn with_corners(mut self, corners: Corners) -> Self {
        self.corners = corners.or_all();
        self
    }

    pub fn with_keep_border(mut self, keep: bool) -> Self {
        self.keep_border = keep;
        self
    }

    pub fn with_corner_color(mut self, color: Color) -> Self {
        self.corner_color = Some(color);
        self
    }

    pub fn with_strip_color(mut self, color: Color) -> Self {
        self.strip_color = Some(color);
        self
    }

    #[inline]
    pub fn effect(&self) -> EdgeEffect {
        self.effect
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn corners(&self) -> Corners {
        self.corners
    }

    #[inline]
    pub fn keep_border(&self) -> bool {
        self.keep_border
    }

    #[inline]
    pub fn corner_color(&self) -> Option<Color> {
        self.corner_color
    }

    #[inline]
    pub fn strip_color(&self) -> Option<Color> {
        self.strip_color
    }

    /// Profile for this request's effect and width.
    pub fn profile(&self) -> BorderProfile {
        compute_profile(self.effect, self.width)
    }
}

impl FromStr for CornerRequest {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CornerRequest {
    /// Canonical option string; parsing it yields an equal request except
    /// for color precision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}px {}", self.effect, self.width, self.corners)?;
        if self.keep_border {
            f.write_str(" keep")?;
        }
        for (tag, color) in [("cc", self.corner_color), ("sc", self.strip_color)] {
            if let Some(c) = color {
                let [r, g, b, a] = c.to_rgba8();
                write!(f, " {tag}:#{r:02x}{g:02x}{b:02x}")?;
                if a != 255 {
                    write!(f, "{a:02x}")?;
                }
            }
        }
        Ok(())
    }
}
