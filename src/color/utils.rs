use libm::{fabsf, fmodf, roundf};

use crate::color::{Rgb, WireColor};
use crate::error::Error;

/// Scale an 8-bit value by a brightness factor (0-255 = 0.0-1.0)
///
/// Returns `floor(value * brightness / 255)`, so full brightness is lossless.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16) / 255) as u8
}

/// Scale every channel of a color
#[inline]
pub const fn scale_color(color: Rgb, brightness: u8) -> Rgb {
    Rgb {
        r: scale(color.r, brightness),
        g: scale(color.g, brightness),
        b: scale(color.b, brightness),
    }
}

/// Convert HSV to RGB
///
/// # Arguments
/// * `hue` - Hue in degrees, `[0, 360)`
/// * `sat` - Saturation, `[0, 1]`
/// * `val` - Value, `[0, 1]`
///
/// Sectors are selected on 60 degree boundaries with a strict upper bound, so
/// `hue = 60.0` already belongs to the yellow-green sector.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsv_to_rgb(hue: f32, sat: f32, val: f32) -> Rgb {
    let chroma = val * sat;
    let x = chroma * (1.0 - fabsf(fmodf(hue / 60.0, 2.0) - 1.0));
    let m = val - chroma;

    let (r, g, b) = if hue < 60.0 {
        (chroma, x, 0.0)
    } else if hue < 120.0 {
        (x, chroma, 0.0)
    } else if hue < 180.0 {
        (0.0, chroma, x)
    } else if hue < 240.0 {
        (0.0, x, chroma)
    } else if hue < 300.0 {
        (x, 0.0, chroma)
    } else {
        (chroma, 0.0, x)
    };

    // `as` saturates, so tiny float overshoot cannot wrap
    Rgb {
        r: roundf((r + m) * 255.0) as u8,
        g: roundf((g + m) * 255.0) as u8,
        b: roundf((b + m) * 255.0) as u8,
    }
}

/// Linear blend between two colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `factor` - Blend factor (0.0 = all a, 1.0 = all b)
///
/// Channels are truncated, not rounded.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn blend(a: Rgb, b: Rgb, factor: f32) -> Rgb {
    let factor = factor.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - factor) + f32::from(b) * factor) as u8;
    Rgb {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
    }
}

/// Reorder logical RGB to the GRB wire order of WS2812 strips
#[inline]
pub const fn hardware_channel_order(color: Rgb) -> WireColor {
    (color.g, color.r, color.b)
}

/// Build a color from raw integer channels
///
/// Values outside 0-255 are rejected rather than clamped.
pub fn try_rgb(r: i32, g: i32, b: i32) -> Result<Rgb, Error> {
    let channel = |value: i32| u8::try_from(value).map_err(|_| Error::InvalidChannelValue(value));
    Ok(Rgb {
        r: channel(r)?,
        g: channel(g)?,
        b: channel(b)?,
    })
}
