use crate::presentation::view_models::RgbColor;

/// Parse `#rrggbb` (leading `#` optional)
pub fn parse_hex_color(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
