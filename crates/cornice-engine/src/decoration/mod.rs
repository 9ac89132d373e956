//! Strip decorations and the rendering port that applies them.
//!
//! A decoration is a list of [`Band`]s, one per decorated edge. Each band is a
//! stack of 1-pixel [`Strip`]s whose left/right border widths carve the corner
//! silhouette out of the element. [`build_decoration`] is pure; [`decorate`]
//! and [`uncorner`] drive a [`DecorationTarget`].

mod build;

pub use build::build_decoration;

use crate::coords::Insets;
use crate::paint::Color;
use crate::request::{CornerRequest, Edge};

/// One 1-pixel row of a band.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Strip {
    /// Left border width in pixels.
    pub left: u32,
    /// Right border width in pixels.
    pub right: u32,
}

/// Where a band sits relative to the element's content box.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placement {
    /// In normal flow, pulled over the padding by (possibly negative) margins.
    Flow { margin: Insets },
    /// Absolutely positioned against the bottom of a fixed-height element.
    PinnedBottom,
}

/// Colors shared by every strip of a band.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StripStyle {
    pub border: Color,
    /// `None` = transparent.
    pub fill: Option<Color>,
}

/// Container of one edge's strips.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub edge: Edge,
    pub placement: Placement,
    pub style: StripStyle,
    /// Visual order, top row first.
    pub strips: Vec<Strip>,
}

impl Band {
    /// Height of the band in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.strips.len()
    }
}

/// Full decoration for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    /// The element's own border is removed before bands are attached.
    pub clear_border: bool,
    pub bands: Vec<Band>,
}

/// Element facts the builder needs.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ElementMetrics {
    pub padding: Insets,
    /// Height is fixed rather than content-sized.
    pub fixed_height: bool,
    /// Background of the nearest non-transparent ancestor, if any.
    pub inherited_background: Option<Color>,
}

/// Rendering port: anything a decoration can be applied to.
pub trait DecorationTarget {
    fn metrics(&self) -> ElementMetrics;

    fn remove_border(&mut self);

    /// Top bands go before existing content, bottom bands after it.
    fn attach_band(&mut self, band: Band);

    /// Removes every attached band, returning how many were removed.
    fn detach_bands(&mut self) -> usize;
}

/// Builds a decoration for `target` and applies it. Returns the number of
/// bands attached.
pub fn decorate<T: DecorationTarget + ?Sized>(target: &mut T, request: &CornerRequest) -> usize {
    let decoration = build_decoration(request, &target.metrics());

    if decoration.clear_border {
        target.remove_border();
    }

    let count = decoration.bands.len();
    for band in decoration.bands {
        target.attach_band(band);
    }

    log::debug!("decorated element with {count} band(s) for `{request}`");
    count
}

/// Removes a decoration previously applied by [`decorate`].
pub fn uncorner<T: DecorationTarget + ?Sized>(target: &mut T) -> usize {
    let removed = target.detach_bands();
    log::debug!("removed {removed} corner band(s)");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Corners;

    #[derive(Default)]
    struct Recorder {
        metrics: ElementMetrics,
        border_removed: bool,
        bands: Vec<Band>,
    }

    impl DecorationTarget for Recorder {
        fn metrics(&self) -> ElementMetrics {
            self.metrics
        }

        fn remove_border(&mut self) {
            self.border_removed = true;
        }

        fn attach_band(&mut self, band: Band) {
            self.bands.push(band);
        }

        fn detach_bands(&mut self) -> usize {
            let n = self.bands.len();
            self.bands.clear();
            n
        }
    }

    #[test]
    fn decorate_attaches_one_band_per_edge() {
        let mut el = Recorder::default();
        assert_eq!(decorate(&mut el, &CornerRequest::default()), 2);
        assert!(el.border_removed);
        assert_eq!(el.bands[0].edge, Edge::Top);
        assert_eq!(el.bands[1].edge, Edge::Bottom);
    }

    #[test]
    fn keep_border_leaves_border_alone() {
        let mut el = Recorder::default();
        decorate(&mut el, &CornerRequest::parse("keep tl"));
        assert!(!el.border_removed);
        assert_eq!(el.bands.len(), 1);
    }

    #[test]
    fn uncorner_removes_everything() {
        let mut el = Recorder::default();
        let request = CornerRequest::default().with_corners(Corners::BOTTOM);
        decorate(&mut el, &request);
        decorate(&mut el, &request);
        assert_eq!(uncorner(&mut el), 2);
        assert!(el.bands.is_empty());
        assert_eq!(uncorner(&mut el), 0);
    }

    #[test]
    fn works_through_trait_object() {
        let mut el = Recorder::default();
        let target: &mut dyn DecorationTarget = &mut el;
        assert_eq!(decorate(target, &CornerRequest::parse("bevel 3px top")), 1);
    }
}
