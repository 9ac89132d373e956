/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Parses a CSS hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    ///
    /// The leading `#` is optional. Any other digit count yields `None`.
    pub fn from_hex(src: &str) -> Option<Self> {
        let hex = src.strip_prefix('#').unwrap_or(src);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 | 4 => {
                // `#abc` expands to `#aabbcc`, `#abcd` to `#aabbccdd`
                let mut c = [255u8; 4];
                for (slot, ch) in c.iter_mut().zip(hex.chars()) {
                    *slot = ch.to_digit(16)? as u8 * 17;
                }
                Some(Self::from_srgb_u8(c[0], c[1], c[2], c[3]))
            }
            6 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha sRGB bytes, as stored in RGBA8 images.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }

    /// Inverse of [`to_rgba8`](Self::to_rgba8).
    #[inline]
    pub fn from_rgba8(px: [u8; 4]) -> Self {
        Self::from_srgb_u8(px[0], px[1], px[2], px[3])
    }

    /// Source-over composite of `self` onto `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        let k = 1.0 - self.a;
        Color {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_short_form_expands() {
        let c = Color::from_hex("#f80").unwrap();
        assert_eq!(c.to_rgba8(), [0xff, 0x88, 0x00, 0xff]);
    }

    #[test]
    fn hex_short_form_with_alpha() {
        assert_eq!(Color::from_hex("#f008").unwrap().to_rgba8(), [0xff, 0x00, 0x00, 0x88]);
        assert_eq!(Color::from_hex("#0000").unwrap().to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn hex_long_forms() {
        assert_eq!(Color::from_hex("#1a2b3c").unwrap().to_rgba8(), [0x1a, 0x2b, 0x3c, 0xff]);
        assert_eq!(Color::from_hex("ffffff00").unwrap().to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn hex_rejects_bad_lengths_and_digits() {
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#").is_none());
        assert!(Color::from_hex("#xyz").is_none());
    }

    #[test]
    fn over_opaque_source_replaces() {
        let red = Color::from_srgb_u8(255, 0, 0, 255);
        assert_eq!(red.over(Color::white()), red);
    }

    #[test]
    fn over_transparent_source_keeps_destination() {
        assert_eq!(Color::transparent().over(Color::black()), Color::black());
    }

    #[test]
    fn half_alpha_blends_evenly() {
        let half_black = Color::from_srgb_u8(0, 0, 0, 128);
        let out = half_black.over(Color::white()).to_rgba8();
        assert_eq!(out[3], 255);
        assert!((out[0] as i32 - 127).abs() <= 1);
    }
}
