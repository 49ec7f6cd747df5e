use image::{Luma, Rgba};

// ITU-R BT.601 weights (0.299, 0.587, 0.114) scaled by 2^16. They sum to 2^16.
const RED_WEIGHT: u32 = 19595;
const GREEN_WEIGHT: u32 = 38470;
const BLUE_WEIGHT: u32 = 7471;
const ROUNDING: u32 = 1 << 15;
const CHANNEL_MAX: u32 = u16::MAX as u32;

/// 16-bit color with every channel already multiplied by alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RGBColorFormat<T> {
    red: T,
    green: T,
    blue: T,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrayColorFormat {
    pub luma: u8,
}

#[cfg(test)]
impl RGBColorFormat<u16> {
    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

impl From<&Rgba<u16>> for RGBColorFormat<u16> {
    fn from(value: &Rgba<u16>) -> Self {
        let [red, green, blue, alpha] = value.0;
        let premultiply = |channel: u16| (channel as u32 * alpha as u32 / CHANNEL_MAX) as u16;
        Self {
            red: premultiply(red),
            green: premultiply(green),
            blue: premultiply(blue),
        }
    }
}

impl From<&RGBColorFormat<u16>> for GrayColorFormat {
    fn from(value: &RGBColorFormat<u16>) -> Self {
        let weighted_red = RED_WEIGHT * value.red as u32;
        let weighted_green = GREEN_WEIGHT * value.green as u32;
        let weighted_blue = BLUE_WEIGHT * value.blue as u32;
        // Cannot overflow: the weights sum to 2^16 and each channel is at most 2^16 - 1.
        let luma = (weighted_red + weighted_green + weighted_blue + ROUNDING) >> 24;
        GrayColorFormat { luma: luma as u8 }
    }
}

impl From<GrayColorFormat> for Luma<u8> {
    fn from(value: GrayColorFormat) -> Self {
        Luma([value.luma])
    }
}

pub fn luma_of(pixel: &Rgba<u16>) -> Luma<u8> {
    GrayColorFormat::from(&RGBColorFormat::from(pixel)).into()
}
