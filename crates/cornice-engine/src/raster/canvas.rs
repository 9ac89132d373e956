use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use super::RasterError;
use crate::coords::{Insets, Rect};
use crate::decoration::{Band, DecorationTarget, ElementMetrics, Placement, Strip};
use crate::paint::Color;
use crate::request::Edge;

/// Solid border drawn inside the box edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxBorder {
    pub width: u32,
    pub color: Color,
}

impl BoxBorder {
    #[inline]
    pub fn new(width: u32, color: Color) -> Self {
        Self { width, color }
    }
}

/// A single box on a parent background, rendered to pixels.
///
/// `width`/`height` are the box's border-box size. The image is the box plus
/// `margin` pixels of parent background on every side.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    margin: u32,
    padding: Insets,
    background: Color,
    border: Option<BoxBorder>,
    parent_background: Option<Color>,
    fixed_height: bool,
    bands: Vec<Band>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: 0,
            padding: Insets::zero(),
            background: Color::white(),
            border: None,
            parent_background: None,
            fixed_height: false,
            bands: Vec::new(),
        }
    }

    pub fn margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, border: BoxBorder) -> Self {
        self.border = Some(border);
        self
    }

    /// `None` renders the surroundings white, as an unstyled page would.
    pub fn parent_background(mut self, color: Option<Color>) -> Self {
        self.parent_background = color;
        self
    }

    pub fn fixed_height(mut self, fixed: bool) -> Self {
        self.fixed_height = fixed;
        self
    }

    #[inline]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    #[inline]
    pub fn has_border(&self) -> bool {
        self.border.is_some()
    }

    /// Image dimensions including the margin.
    pub fn image_size(&self) -> (u32, u32) {
        (
            self.width.saturating_add(self.margin.saturating_mul(2)),
            self.height.saturating_add(self.margin.saturating_mul(2)),
        )
    }

    /// Paints the parent, the box and every attached band.
    pub fn render(&self) -> RgbaImage {
        let (w, h) = self.image_size();
        let parent = self.parent_background.unwrap_or_else(Color::white);
        let mut img = RgbaImage::from_pixel(w, h, Rgba(parent.to_rgba8()));

        let m = px(self.margin);
        let outer = Rect::new(m, m, px(self.width), px(self.height));
        let inner = match self.border {
            Some(b) => {
                fill(&mut img, outer, b.color);
                outer.inset(Insets::all(px(b.width)))
            }
            None => outer,
        };
        fill(&mut img, inner, self.background);

        for band in &self.bands {
            self.paint_band(&mut img, inner, band);
        }
        img
    }

    /// Renders and writes a PNG to `path`.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        if self.width == 0 || self.height == 0 {
            return Err(RasterError::EmptyCanvas);
        }
        let path = path.as_ref();
        self.render().save_with_format(path, ImageFormat::Png)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    fn paint_band(&self, img: &mut RgbaImage, inner: Rect, band: &Band) {
        let content = inner.inset(self.padding);
        let height = i32::try_from(band.height()).unwrap_or(i32::MAX);

        let (x0, x1, y0) = match (band.placement, band.edge) {
            (Placement::Flow { margin }, Edge::Top) => (
                content.x.saturating_add(margin.left),
                content.right().saturating_sub(margin.right),
                content.y.saturating_add(margin.top),
            ),
            (Placement::Flow { margin }, Edge::Bottom) => (
                content.x.saturating_add(margin.left),
                content.right().saturating_sub(margin.right),
                content.bottom().saturating_add(margin.top),
            ),
            (Placement::PinnedBottom, _) => {
                (inner.x, inner.right(), inner.bottom().saturating_sub(height))
            }
        };

        for (k, strip) in band.strips.iter().enumerate() {
            let y = y0.saturating_add(i32::try_from(k).unwrap_or(i32::MAX));
            let row = Rect::new(x0, y, x1.saturating_sub(x0), 1);
            paint_strip(img, row, *strip, band.style.border, band.style.fill);
        }
    }
}

impl DecorationTarget for Canvas {
    fn metrics(&self) -> ElementMetrics {
        ElementMetrics {
            padding: self.padding,
            fixed_height: self.fixed_height,
            inherited_background: self.parent_background,
        }
    }

    fn remove_border(&mut self) {
        self.border = None;
    }

    fn attach_band(&mut self, band: Band) {
        match band.edge {
            Edge::Top => self.bands.insert(0, band),
            Edge::Bottom => self.bands.push(band),
        }
    }

    fn detach_bands(&mut self) -> usize {
        let n = self.bands.len();
        self.bands.clear();
        n
    }
}

#[inline]
fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

fn paint_strip(img: &mut RgbaImage, row: Rect, strip: Strip, border: Color, fill_color: Option<Color>) {
    if row.is_empty() {
        return;
    }
    let left = px(strip.left).min(row.w);
    let right = px(strip.right).min(row.w);

    if let Some(c) = fill_color {
        let middle = row.w - left - right;
        if middle > 0 {
            fill(img, Rect::new(row.x.saturating_add(left), row.y, middle, 1), c);
        }
    }
    fill(img, Rect::new(row.x, row.y, left, 1), border);
    fill(img, Rect::new(row.right() - right, row.y, right, 1), border);
}

/// Source-over fill of `rect`, clipped to the image.
fn fill(img: &mut RgbaImage, rect: Rect, color: Color) {
    if color.is_transparent() {
        return;
    }
    let bounds = Rect::new(0, 0, px(img.width()), px(img.height()));
    let Some(r) = bounds.intersect(rect) else {
        return;
    };

    let solid = color.to_rgba8();
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            let p = img.get_pixel_mut(x as u32, y as u32);
            p.0 = if color.is_opaque() {
                solid
            } else {
                color.over(Color::from_rgba8(p.0)).to_rgba8()
            };
        }
    }
}
