mod utils;

use smart_leds::RGB8;
pub use utils::{blend, hardware_channel_order, hsv_to_rgb, scale, scale_color, try_rgb};

/// Logical pixel color, 8 bits per channel
pub type Rgb = RGB8;

/// Channel triple in the order the strip expects on the wire (GRB)
pub type WireColor = (u8, u8, u8);

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
