/// Per-side pixel offsets (padding or margin).
///
/// Sides follow CSS order: top, right, bottom, left. Margins may be negative.
/// Sums saturate at the `i32` range.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(v: i32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0)
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub const fn h(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub const fn v(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_totals() {
        let e = Insets::new(1, 2, 3, 4);
        assert_eq!(e.h(), 6);
        assert_eq!(e.v(), 4);
    }

    #[test]
    fn axis_totals_saturate() {
        assert_eq!(Insets::all(i32::MAX).h(), i32::MAX);
        assert_eq!(Insets::all(i32::MIN).v(), i32::MIN);
    }
}
