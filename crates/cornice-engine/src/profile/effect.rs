use std::fmt;

/// Named corner-curvature function.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum EdgeEffect {
    #[default]
    Round,
    Cool,
    Sharp,
    Bite,
    Slide,
    Jut,
    Curl,
    Tear,
    Wicked,
    Long,
    Sculpt,
    Dog,
    Dog2,
    Dog3,
    Fray,
    Notch,
    Bevel,
}

impl EdgeEffect {
    pub const ALL: [EdgeEffect; 17] = [
        EdgeEffect::Round,
        EdgeEffect::Cool,
        EdgeEffect::Sharp,
        EdgeEffect::Bite,
        EdgeEffect::Slide,
        EdgeEffect::Jut,
        EdgeEffect::Curl,
        EdgeEffect::Tear,
        EdgeEffect::Wicked,
        EdgeEffect::Long,
        EdgeEffect::Sculpt,
        EdgeEffect::Dog,
        EdgeEffect::Dog2,
        EdgeEffect::Dog3,
        EdgeEffect::Fray,
        EdgeEffect::Notch,
        EdgeEffect::Bevel,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EdgeEffect::Round => "round",
            EdgeEffect::Cool => "cool",
            EdgeEffect::Sharp => "sharp",
            EdgeEffect::Bite => "bite",
            EdgeEffect::Slide => "slide",
            EdgeEffect::Jut => "jut",
            EdgeEffect::Curl => "curl",
            EdgeEffect::Tear => "tear",
            EdgeEffect::Wicked => "wicked",
            EdgeEffect::Long => "long",
            EdgeEffect::Sculpt => "sculpt",
            EdgeEffect::Dog => "dog",
            EdgeEffect::Dog2 => "dog2",
            EdgeEffect::Dog3 => "dog3",
            EdgeEffect::Fray => "fray",
            EdgeEffect::Notch => "notch",
            EdgeEffect::Bevel => "bevel",
        }
    }

    /// Exact, case-sensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fx| fx.name() == name)
    }

    /// Like [`from_name`](Self::from_name) but unknown names fall back to `Round`.
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::debug!("unknown edge effect {name:?}, using round");
            EdgeEffect::Round
        })
    }

    /// Unclamped width of layer `i` for a corner `width` pixels wide.
    ///
    /// May be negative, NaN or infinite for out-of-domain inputs; callers
    /// clamp through [`compute_profile`](super::compute_profile).
    pub fn raw_layer_width(self, i: u32, width: u32) -> f64 {
        let fi = i as f64;
        let w = width as f64;
        let round = |x: f64| (x + 0.5).floor();

        match self {
            EdgeEffect::Round => round(w * (1.0 - (fi / w).asin().cos())),
            EdgeEffect::Cool => round(w * (1.0 + (fi / w).asin().cos())),
            EdgeEffect::Sharp => round(w * (1.0 - (fi / w).acos().cos())),
            EdgeEffect::Bite => round(w * ((w - fi - 1.0) / w).asin().cos()),
            EdgeEffect::Slide => round(w * fi.atan2(w / fi)),
            EdgeEffect::Jut => round(w * w.atan2(w - fi - 1.0)),
            EdgeEffect::Curl => round(w * fi.atan()),
            EdgeEffect::Tear => round(w * fi.cos()),
            EdgeEffect::Wicked => round(w * fi.tan()),
            EdgeEffect::Long => round(w * fi.sqrt()),
            EdgeEffect::Sculpt => round(w * (w - fi - 1.0).log(w)),
            EdgeEffect::Dog => if i & 1 != 0 { fi + 1.0 } else { w },
            EdgeEffect::Dog2 => if i & 2 != 0 { fi + 1.0 } else { w },
            EdgeEffect::Dog3 => if i & 3 != 0 { fi + 1.0 } else { w },
            EdgeEffect::Fray => (i % 2) as f64 * w,
            EdgeEffect::Notch => w,
            EdgeEffect::Bevel => fi + 1.0,
        }
    }
}

impl fmt::Display for EdgeEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
