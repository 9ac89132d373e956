use std::sync::LazyLock;

use regex::Regex;

use super::{CornerRequest, Corners};
use crate::paint::Color;
use crate::profile::{normalize_width, EdgeEffect, MAX_WIDTH};

// Leftmost match wins; at equal positions the alternation order decides,
// so `dog3`/`dog2` must precede `dog`.
static EFFECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "round|bevel|notch|bite|cool|sharp|slide|jut|curl|tear|fray|wicked|sculpt|long|dog3|dog2|dog",
    )
    .expect("effect pattern is valid")
});
static WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)px").expect("width pattern is valid"));
static CORNER_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"cc:(#[0-9a-f]+)").expect("cc pattern is valid"));
static STRIP_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sc:(#[0-9a-f]+)").expect("sc pattern is valid"));

pub(super) fn parse_options(options: &str) -> CornerRequest {
    let o = options.to_lowercase();

    let effect = EFFECT_RE
        .find(&o)
        .map(|m| EdgeEffect::from_name_or_default(m.as_str()))
        .unwrap_or_default();

    let raw_width = WIDTH_RE
        .captures(&o)
        .and_then(|c| c[1].parse::<i64>().ok());
    let width = normalize_width(raw_width);

    let corners = Corners::new(
        o.contains("top") || o.contains("tl"),
        o.contains("top") || o.contains("tr"),
        o.contains("bottom") || o.contains("bl"),
        o.contains("bottom") || o.contains("br"),
    );

    let mut request = CornerRequest::new(effect, width)
        .with_corners(corners)
        .with_keep_border(o.contains("keep"));
    if let Some(cc) = capture_color(&CORNER_COLOR_RE, &o) {
        request = request.with_corner_color(cc);
    }
    if let Some(sc) = capture_color(&STRIP_COLOR_RE, &o) {
        request = request.with_strip_color(sc);
    }

    log::debug!("parsed corner options {options:?} as {request}");
    request
}

fn capture_color(re: &Regex, o: &str) -> Option<Color> {
    let hex = re.captures(o)?.get(1)?.as_str();
    let color = Color::from_hex(hex);
    if color.is_none() {
        log::debug!("ignoring unusable color {hex:?}");
    }
    color
}
