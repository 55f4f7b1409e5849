//! Day/night cycle: illumination curve and sky color.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Sky color at full daylight.
pub const DAY_COLOR: Rgb = Rgb {
    r: 100,
    g: 149,
    b: 237,
};

/// Sky color at night.
pub const NIGHT_COLOR: Rgb = Rgb { r: 10, g: 10, b: 50 };

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Normalized sunlight intensity for a moment within the day.
///
/// A phase-shifted sinusoid: 0 at the start of the day, 1 at midday,
/// back to 0 at the end of the day. Always within `[0, 1]`.
pub fn illumination(time_in_day: f64, day_duration: f64) -> f64 {
    let phase = (time_in_day / day_duration) * TAU;
    (((phase - FRAC_PI_2).sin() + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Sky color for a given illumination factor.
///
/// Per-channel linear blend from [`NIGHT_COLOR`] to [`DAY_COLOR`].
pub fn background_color(factor: f64) -> Rgb {
    Rgb {
        r: blend(NIGHT_COLOR.r, DAY_COLOR.r, factor),
        g: blend(NIGHT_COLOR.g, DAY_COLOR.g, factor),
        b: blend(NIGHT_COLOR.b, DAY_COLOR.b, factor),
    }
}

// Fractional channels truncate.
fn blend(from: u8, to: u8, factor: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * factor) as u8
}
