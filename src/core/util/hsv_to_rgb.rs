use crate::core::data::colour::{Colour, Hsv};

fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Six-sector HSV to RGB conversion with every channel on a `0..=255` scale.
///
/// Hue 0 and hue 255 are both red; hue 85 is green and hue 170 is blue.
#[must_use]
pub fn hsv_to_rgb(hsv: Hsv) -> Colour {
    let Hsv { h, s, v } = hsv;

    if s == 0 {
        return Colour::grey(v);
    }

    let scaled_hue = f64::from(h) * 6.0 / 255.0;
    let sector = scaled_hue.floor();
    let fraction = scaled_hue - sector;
    let saturation = f64::from(s) / 255.0;
    let value = f64::from(v);

    let p = to_channel(value * (1.0 - saturation));
    let q = to_channel(value * (1.0 - saturation * fraction));
    let t = to_channel(value * (1.0 - saturation * (1.0 - fraction)));

    let (r, g, b) = match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Colour { r, g, b }
}
