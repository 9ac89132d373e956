use super::Insets;

/// Axis-aligned pixel rectangle (top-left origin).
///
/// Edge arithmetic saturates, so oversized insets collapse the rect instead
/// of wrapping.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Shrinks the rect by `edges`, clamping the size at zero.
    #[inline]
    pub fn inset(self, edges: Insets) -> Rect {
        Rect::new(
            self.x.saturating_add(edges.left),
            self.y.saturating_add(edges.top),
            self.w.saturating_sub(edges.h()).max(0),
            self.h.saturating_sub(edges.v()).max(0),
        )
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            None
        } else {
            Some(Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_asymmetric() {
        let r = Rect::new(5, 5, 100, 60).inset(Insets::new(4, 10, 8, 6));
        assert_eq!(r, Rect::new(11, 9, 84, 48));
    }

    #[test]
    fn inset_clamps_to_zero() {
        let r = Rect::new(0, 0, 10, 10).inset(Insets::all(20));
        assert_eq!(r.w, 0);
        assert_eq!(r.h, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn inset_with_saturated_edges_collapses() {
        let r = Rect::new(0, 0, 40, 30).inset(Insets::all(i32::MAX));
        assert_eq!(r.x, i32::MAX);
        assert!(r.is_empty());
        assert_eq!(r.right(), i32::MAX);
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(b), Some(Rect::new(5, 5, 5, 5)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(a.intersect(b).is_none());
    }

    #[test]
    fn intersect_negative_origin_clips() {
        let canvas = Rect::new(0, 0, 20, 20);
        let row = Rect::new(-5, 3, 10, 1);
        assert_eq!(canvas.intersect(row), Some(Rect::new(0, 3, 5, 1)));
    }
}
