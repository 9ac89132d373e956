use super::EdgeEffect;

/// Corner width used when a request carries no usable width.
pub const DEFAULT_WIDTH: u32 = 10;

/// Widest corner accepted; wider requests are treated as invalid.
pub const MAX_WIDTH: u32 = 4096;

/// Maps a raw width to a usable one: missing, non-positive or values above
/// [`MAX_WIDTH`] become [`DEFAULT_WIDTH`].
pub fn normalize_width(raw: Option<i64>) -> u32 {
    match raw.and_then(|w| u32::try_from(w).ok()) {
        Some(w) => effective_width(w),
        None => DEFAULT_WIDTH,
    }
}

/// Same policy as [`normalize_width`] for an already unsigned width.
#[inline]
pub fn effective_width(width: u32) -> u32 {
    if width == 0 || width > MAX_WIDTH {
        log::debug!("corner width {width} out of range, using {DEFAULT_WIDTH}");
        DEFAULT_WIDTH
    } else {
        width
    }
}

/// Per-layer border widths for one effect invocation.
///
/// `len() == width()`. Index 0 is the layer at the inner end of the curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderProfile {
    effect: EdgeEffect,
    layers: Vec<u32>,
}

impl BorderProfile {
    #[inline]
    pub fn effect(&self) -> EdgeEffect {
        self.effect
    }

    /// Corner width in pixels (number of layers).
    #[inline]
    pub fn width(&self) -> u32 {
        self.layers.len() as u32
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u32> + ExactSizeIterator + '_ {
        self.layers.iter().copied()
    }
}

/// Clamps a raw layer width: NaN and negatives become 0, huge values saturate.
#[inline]
fn clamp_layer(v: f64) -> u32 {
    if v.is_nan() || v <= 0.0 {
        0
    } else if v >= u32::MAX as f64 {
        u32::MAX
    } else {
        v as u32
    }
}

/// Evaluates `effect` for every layer of a corner `width` pixels wide.
///
/// A `width` of 0 or above [`MAX_WIDTH`] is treated as [`DEFAULT_WIDTH`].
pub fn compute_profile(effect: EdgeEffect, width: u32) -> BorderProfile {
    let width = effective_width(width);
    let layers = (0..width)
        .map(|i| clamp_layer(effect.raw_layer_width(i, width)))
        .collect();

    log::trace!("computed {effect} profile, width {width}");

    BorderProfile { effect, layers }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(effect: EdgeEffect, width: u32) -> Vec<u32> {
        compute_profile(effect, width).iter().collect()
    }

    // ── shape ─────────────────────────────────────────────────────────────

    #[test]
    fn every_effect_yields_width_layers() {
        for fx in EdgeEffect::ALL {
            for width in 1..=48 {
                let p = compute_profile(fx, width);
                assert_eq!(p.len(), width as usize, "{fx} at width {width}");
                assert_eq!(p.width(), width);
                assert_eq!(p.effect(), fx);
            }
        }
    }

    #[test]
    fn zero_width_uses_default() {
        assert_eq!(compute_profile(EdgeEffect::Bevel, 0).len(), DEFAULT_WIDTH as usize);
        assert_eq!(compute_profile(EdgeEffect::Round, 0), compute_profile(EdgeEffect::Round, 10));
    }

    // ── normalize_width ───────────────────────────────────────────────────

    #[test]
    fn normalize_width_fallbacks() {
        assert_eq!(normalize_width(None), 10);
        assert_eq!(normalize_width(Some(0)), 10);
        assert_eq!(normalize_width(Some(-4)), 10);
        assert_eq!(normalize_width(Some(i64::MAX)), 10);
        assert_eq!(normalize_width(Some(7)), 7);
    }

    #[test]
    fn widths_above_ceiling_use_default() {
        assert_eq!(normalize_width(Some(MAX_WIDTH as i64)), MAX_WIDTH);
        assert_eq!(normalize_width(Some(MAX_WIDTH as i64 + 1)), DEFAULT_WIDTH);
        assert_eq!(normalize_width(Some(3_000_000_000)), DEFAULT_WIDTH);
        assert_eq!(compute_profile(EdgeEffect::Notch, u32::MAX).len(), DEFAULT_WIDTH as usize);
    }

    // ── closed forms ──────────────────────────────────────────────────────

    #[test]
    fn notch_is_constant() {
        assert!(values(EdgeEffect::Notch, 12).iter().all(|&w| w == 12));
    }

    #[test]
    fn bevel_counts_up() {
        assert_eq!(values(EdgeEffect::Bevel, 6), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn dog_family_at_width_ten() {
        assert_eq!(values(EdgeEffect::Dog, 10), vec![10, 2, 10, 4, 10, 6, 10, 8, 10, 10]);
        assert_eq!(values(EdgeEffect::Dog2, 10), vec![10, 10, 3, 4, 10, 10, 7, 8, 10, 10]);
        assert_eq!(values(EdgeEffect::Dog3, 10), vec![10, 2, 3, 4, 10, 6, 7, 8, 10, 10]);
    }

    #[test]
    fn fray_alternates() {
        assert_eq!(values(EdgeEffect::Fray, 10), vec![0, 10, 0, 10, 0, 10, 0, 10, 0, 10]);
    }

    #[test]
    fn round_at_width_ten() {
        assert_eq!(values(EdgeEffect::Round, 10), vec![0, 0, 0, 0, 1, 1, 2, 3, 4, 6]);
    }

    #[test]
    fn round_starts_at_zero_and_stays_within_width() {
        for width in 1..=64 {
            let p = values(EdgeEffect::Round, width);
            assert_eq!(p[0], 0);
            assert!(p[width as usize - 1] <= width);
        }
    }

    #[test]
    fn sharp_is_linear_taper() {
        let expected: Vec<u32> = (0..10).map(|i| 10 - i).collect();
        assert_eq!(values(EdgeEffect::Sharp, 10), expected);
    }

    #[test]
    fn cool_starts_at_double_width() {
        assert_eq!(values(EdgeEffect::Cool, 10)[0], 20);
    }

    #[test]
    fn bite_ends_at_full_width() {
        let p = values(EdgeEffect::Bite, 10);
        assert_eq!(p[9], 10);
        assert_eq!(p[0], 4);
    }

    // ── numeric domain ────────────────────────────────────────────────────

    #[test]
    fn negative_trig_values_clamp_to_zero() {
        // cos(2) < 0 and tan(2) < 0
        assert_eq!(values(EdgeEffect::Tear, 10)[2], 0);
        assert_eq!(values(EdgeEffect::Wicked, 10)[2], 0);
    }

    #[test]
    fn sculpt_degenerate_layers_clamp_to_zero() {
        assert_eq!(values(EdgeEffect::Sculpt, 1), vec![0]);
        assert_eq!(*values(EdgeEffect::Sculpt, 10).last().unwrap(), 0);
    }

    #[test]
    fn clamp_layer_handles_non_finite() {
        assert_eq!(clamp_layer(f64::NAN), 0);
        assert_eq!(clamp_layer(f64::NEG_INFINITY), 0);
        assert_eq!(clamp_layer(f64::INFINITY), u32::MAX);
        assert_eq!(clamp_layer(-0.0), 0);
        assert_eq!(clamp_layer(3.0), 3);
    }
}
