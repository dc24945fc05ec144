// src/color/hex_color.rs
//
// `#RRGGBB` colours (hex digits in either case) and their CSS `rgb()` / `rgba()` forms.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::errors::{Result, SundriesError};
use crate::integer_math::maths::clamp;

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
}

pub fn is_valid_hex(hex: &str) -> bool {
    HEX_COLOR.is_match(hex)
}

pub fn assert_is_valid_hex(hex: &str) -> Result<()> {
    if is_valid_hex(hex) {
        Ok(())
    } else {
        Err(SundriesError::InvalidHexColor(hex.to_string()))
    }
}

pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    assert_is_valid_hex(hex)?;
    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        let digits = &hex[1 + 2 * i..3 + 2 * i];
        *channel = u8::from_str_radix(digits, 16).map_err(|_| SundriesError::InvalidHexColor(hex.to_string()))?;
    }
    Ok(rgb)
}

/// Lightens (positive `amount`) or darkens (negative) every channel; results stay in 0..=255.
pub fn color_shader(hex: &str, amount: i32) -> Result<String> {
    let [r, g, b] = hex_to_rgb(hex)?.map(|channel| (i32::from(channel) + amount).clamp(0, 255));
    Ok(format!("rgb({},{},{})", r, g, b))
}

/// The colour with alpha `opacity`, clamped to [0, 1].
pub fn fade(hex: &str, opacity: f64) -> Result<String> {
    let [r, g, b] = hex_to_rgb(hex)?;
    Ok(format!("rgba({},{},{},{})", r, g, b, clamp(opacity, 0.0, 1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVALID: [&str; 10] = [
        "#", "#0", "#00", "#000", "#0000", "#00000", "#0000000", "#00000000", "000000", "#z1e6t9",
    ];

    #[test]
    fn test_color_shader() {
        assert_eq!(color_shader("#000000", -127).unwrap(), "rgb(0,0,0)");
        assert_eq!(color_shader("#000000", 0).unwrap(), "rgb(0,0,0)");
        assert_eq!(color_shader("#000000", 127).unwrap(), "rgb(127,127,127)");
        assert_eq!(color_shader("#000000", 511).unwrap(), "rgb(255,255,255)");
        assert_eq!(color_shader("#ffffff", 127).unwrap(), "rgb(255,255,255)");
        assert_eq!(color_shader("#ffffff", -127).unwrap(), "rgb(128,128,128)");
        assert_eq!(color_shader("#ffffff", -511).unwrap(), "rgb(0,0,0)");
        for hex in INVALID {
            assert!(matches!(color_shader(hex, 0), Err(SundriesError::InvalidHexColor(_))));
        }
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade("#000000", -1.0).unwrap(), "rgba(0,0,0,0)");
        assert_eq!(fade("#000000", 0.5).unwrap(), "rgba(0,0,0,0.5)");
        assert_eq!(fade("#000000", 1.0).unwrap(), "rgba(0,0,0,1)");
        assert_eq!(fade("#ffffff", 2.0).unwrap(), "rgba(255,255,255,1)");
        assert_eq!(fade("#ffffff", 0.0).unwrap(), "rgba(255,255,255,0)");
        for hex in INVALID {
            assert!(fade(hex, 0.0).is_err());
        }
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#000000").unwrap(), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), [255, 0, 0]);
        assert_eq!(hex_to_rgb("#00FF00").unwrap(), [0, 255, 0]);
        assert_eq!(hex_to_rgb("#0000ff").unwrap(), [0, 0, 255]);
        assert_eq!(hex_to_rgb("#1a2B3c").unwrap(), [26, 43, 60]);
        for hex in INVALID {
            assert!(hex_to_rgb(hex).is_err());
        }
    }

    #[test]
    fn test_assert_is_valid_hex() {
        for hex in ["#000000", "#ff0000", "#ffff00", "#FF00ff", "#ffffff"] {
            assert!(assert_is_valid_hex(hex).is_ok());
        }
        let error = assert_is_valid_hex("#000").unwrap_err();
        assert_eq!(error.to_string(), "Invalid hex color: \"#000\"");
    }
}
