use std::str::FromStr;

use cornice_engine::paint::Color;
use cornice_engine::raster::BoxBorder;

/// `WIDTHxHEIGHT` in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SizeArg {
    pub width: u32,
    pub height: u32,
}

impl FromStr for SizeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))?;
        let dim = |v: &str| {
            v.trim()
                .parse::<u32>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| format!("invalid dimension {v:?}"))
        };
        Ok(SizeArg { width: dim(w)?, height: dim(h)? })
    }
}

/// `WIDTH:#COLOR` border spec.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderArg(pub BoxBorder);

impl FromStr for BorderArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, c) = s
            .split_once(':')
            .ok_or_else(|| format!("expected WIDTH:#COLOR, got {s:?}"))?;
        let width = w.trim().parse::<u32>().map_err(|e| format!("invalid border width {w:?}: {e}"))?;
        Ok(BorderArg(BoxBorder::new(width, parse_color(c)?)))
    }
}

pub fn parse_color(s: &str) -> Result<Color, String> {
    Color::from_hex(s.trim()).ok_or_else(|| format!("invalid color {s:?}, expected #rgb, #rgba, #rrggbb or #rrggbbaa"))
}
