use super::{Band, Decoration, ElementMetrics, Placement, Strip, StripStyle};
use crate::coords::Insets;
use crate::paint::Color;
use crate::profile::BorderProfile;
use crate::request::{CornerRequest, Edge};

/// Computes the bands for `request` on an element described by `metrics`.
///
/// Edges without a requested corner get no band. Unrequested corners on a
/// decorated edge get zero-width borders.
pub fn build_decoration(request: &CornerRequest, metrics: &ElementMetrics) -> Decoration {
    let profile = request.profile();
    let style = StripStyle {
        border: request
            .corner_color()
            .or(metrics.inherited_background)
            .unwrap_or_else(Color::white),
        fill: request.strip_color(),
    };

    let bands = Edge::BOTH
        .into_iter()
        .filter(|&edge| request.corners().touches(edge))
        .map(|edge| Band {
            edge,
            placement: placement(edge, metrics, profile.width()),
            style,
            strips: strips(edge, request, &profile),
        })
        .collect();

    Decoration { clear_border: !request.keep_border(), bands }
}

fn strips(edge: Edge, request: &CornerRequest, profile: &BorderProfile) -> Vec<Strip> {
    let (left, right) = request.corners().on_edge(edge);
    let strip = |w: u32| Strip {
        left: if left { w } else { 0 },
        right: if right { w } else { 0 },
    };

    match edge {
        // Layer 0 sits innermost, so the top edge reads the profile backwards.
        Edge::Top => profile.iter().rev().map(strip).collect(),
        Edge::Bottom => profile.iter().map(strip).collect(),
    }
}

fn placement(edge: Edge, metrics: &ElementMetrics, width: u32) -> Placement {
    let pad = metrics.padding;
    let width = i32::try_from(width).unwrap_or(i32::MAX);
    match edge {
        Edge::Top => Placement::Flow {
            margin: Insets::new(
                pad.top.saturating_neg(),
                pad.right.saturating_neg(),
                pad.top.saturating_sub(width),
                pad.left.saturating_neg(),
            ),
        },
        Edge::Bottom if metrics.fixed_height => Placement::PinnedBottom,
        Edge::Bottom => Placement::Flow {
            margin: Insets::new(
                pad.bottom.saturating_sub(width),
                pad.right.saturating_neg(),
                pad.bottom.saturating_neg(),
                pad.left.saturating_neg(),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Corners;

    fn build(options: &str) -> Decoration {
        build_decoration(&CornerRequest::parse(options), &ElementMetrics::default())
    }

    fn widths(band: &Band) -> Vec<(u32, u32)> {
        band.strips.iter().map(|s| (s.left, s.right)).collect()
    }

    // ── bands ─────────────────────────────────────────────────────────────

    #[test]
    fn all_corners_build_two_bands_of_width_strips() {
        let d = build("round 7px");
        assert_eq!(d.bands.len(), 2);
        assert!(d.bands.iter().all(|b| b.height() == 7));
        assert!(d.clear_border);
    }

    #[test]
    fn bottom_only_builds_single_band() {
        let d = build("bottom");
        assert_eq!(d.bands.len(), 1);
        assert_eq!(d.bands[0].edge, Edge::Bottom);
    }

    // ── strip order ───────────────────────────────────────────────────────

    #[test]
    fn top_band_is_reversed_bottom_is_not() {
        let d = build("bevel 4px");
        assert_eq!(widths(&d.bands[0]), vec![(4, 4), (3, 3), (2, 2), (1, 1)]);
        assert_eq!(widths(&d.bands[1]), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn unrequested_corners_are_masked() {
        let d = build("bevel 3px tl br");
        assert_eq!(widths(&d.bands[0]), vec![(3, 0), (2, 0), (1, 0)]);
        assert_eq!(widths(&d.bands[1]), vec![(0, 1), (0, 2), (0, 3)]);
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn flow_margins_cover_padding() {
        let metrics = ElementMetrics { padding: Insets::new(4, 6, 8, 2), ..Default::default() };
        let d = build_decoration(&CornerRequest::parse("5px"), &metrics);
        assert_eq!(d.bands[0].placement, Placement::Flow { margin: Insets::new(-4, -6, -1, -2) });
        assert_eq!(d.bands[1].placement, Placement::Flow { margin: Insets::new(3, -6, -8, -2) });
    }

    #[test]
    fn fixed_height_pins_bottom_band() {
        let metrics = ElementMetrics { fixed_height: true, ..Default::default() };
        let d = build_decoration(&CornerRequest::default(), &metrics);
        assert!(matches!(d.bands[0].placement, Placement::Flow { .. }));
        assert_eq!(d.bands[1].placement, Placement::PinnedBottom);
    }

    #[test]
    fn extreme_padding_saturates_margins() {
        let metrics = ElementMetrics { padding: Insets::all(i32::MIN), ..Default::default() };
        let d = build_decoration(&CornerRequest::parse("4px"), &metrics);
        assert_eq!(
            d.bands[0].placement,
            Placement::Flow { margin: Insets::new(i32::MAX, i32::MAX, i32::MIN, i32::MAX) }
        );
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[test]
    fn border_color_fallback_chain() {
        let parent = Color::from_srgb_u8(10, 20, 30, 255);
        let metrics = ElementMetrics { inherited_background: Some(parent), ..Default::default() };

        let inherited = build_decoration(&CornerRequest::default(), &metrics);
        assert_eq!(inherited.bands[0].style.border, parent);

        let explicit = build_decoration(&CornerRequest::parse("cc:#fff000"), &metrics);
        assert_eq!(explicit.bands[0].style.border.to_rgba8(), [0xff, 0xf0, 0x00, 0xff]);

        assert_eq!(build("").bands[0].style.border, Color::white());
    }

    #[test]
    fn strip_fill_defaults_to_transparent() {
        assert_eq!(build("").bands[0].style.fill, None);
        assert!(build("sc:#000").bands[0].style.fill.is_some());
    }

    #[test]
    fn keep_border_is_carried() {
        let request = CornerRequest::default().with_corners(Corners::TOP).with_keep_border(true);
        assert!(!build_decoration(&request, &ElementMetrics::default()).clear_border);
    }
}
