use std::fmt;
use std::ops::BitOr;

/// Horizontal edge of the decorated element.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub const BOTH: [Edge; 2] = [Edge::Top, Edge::Bottom];
}

/// Set of corners to decorate.
///
/// Corners follow CSS naming: top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Corners {
    pub const TL: Corners = Corners::new(true, false, false, false);
    pub const TR: Corners = Corners::new(false, true, false, false);
    pub const BL: Corners = Corners::new(false, false, true, false);
    pub const BR: Corners = Corners::new(false, false, false, true);
    pub const TOP: Corners = Corners::new(true, true, false, false);
    pub const BOTTOM: Corners = Corners::new(false, false, true, true);

    #[inline]
    pub const fn new(top_left: bool, top_right: bool, bottom_left: bool, bottom_right: bool) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    #[inline]
    pub const fn all() -> Self {
        Self::new(true, true, true, true)
    }

    #[inline]
    pub const fn none() -> Self {
        Self::new(false, false, false, false)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        !(self.top_left || self.top_right || self.bottom_left || self.bottom_right)
    }

    /// An empty selection means "every corner".
    #[inline]
    pub const fn or_all(self) -> Self {
        if self.is_empty() { Self::all() } else { self }
    }

    /// `(left, right)` selection on `edge`.
    #[inline]
    pub const fn on_edge(self, edge: Edge) -> (bool, bool) {
        match edge {
            Edge::Top => (self.top_left, self.top_right),
            Edge::Bottom => (self.bottom_left, self.bottom_right),
        }
    }

    /// True if either corner of `edge` is selected.
    #[inline]
    pub const fn touches(self, edge: Edge) -> bool {
        let (l, r) = self.on_edge(edge);
        l || r
    }
}

impl BitOr for Corners {
    type Output = Corners;

    #[inline]
    fn bitor(self, rhs: Corners) -> Corners {
        Corners::new(
            self.top_left || rhs.top_left,
            self.top_right || rhs.top_right,
            self.bottom_left || rhs.bottom_left,
            self.bottom_right || rhs.bottom_right,
        )
    }
}

impl fmt::Display for Corners {
    /// Option-string spelling, e.g. `top bl`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut words = Vec::with_capacity(4);
        for (edge, whole, left, right) in [(Edge::Top, "top", "tl", "tr"), (Edge::Bottom, "bottom", "bl", "br")] {
            match self.on_edge(edge) {
                (true, true) => words.push(whole),
                (true, false) => words.push(left),
                (false, true) => words.push(right),
                (false, false) => {}
            }
        }
        f.write_str(&words.join(" "))
    }
}
