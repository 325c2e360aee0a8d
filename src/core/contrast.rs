//! WCAG 2.x contrast math.
//!
//! Pure functions only: hex parsing, relative luminance, contrast ratio and
//! AA classification. Everything downstream (pair enumeration, report
//! rendering, persistence) lives in the pipeline; this module has no I/O.
//!
//! The thresholds cover the AA tier with a single large-text flag. This is a
//! deliberate simplification: font-weight-adjusted thresholds and the AAA
//! tier are not modeled.

use crate::domain::model::{Compliance, Rgb};
use crate::utils::error::{Result, ThemeError};

/// Minimum AA contrast ratio for normal-size text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;
/// Minimum AA contrast ratio for large text (18pt, or 14pt bold).
pub const WCAG_AA_LARGE_TEXT: f64 = 3.0;

/// Parse a 6-hex-digit color string with an optional `#` prefix.
pub fn parse_hex(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ThemeError::InvalidColorFormat {
            value: hex.to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ThemeError::InvalidColorFormat {
            value: hex.to_string(),
        })
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// sRGB channel (0-255) to linear light: V/12.92 below the knee,
/// ((V+0.055)/1.055)^2.4 above it.
fn srgb_to_linear(channel: u8) -> f64 {
    let s = channel as f64 / 255.0;
    if s <= 0.03928 {
        s / 12.92
    } else {
        ((s + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG: L = 0.2126*R + 0.7152*G + 0.0722*B over the
/// linearized channels. Always in [0, 1].
pub fn relative_luminance(c: Rgb) -> f64 {
    0.2126 * srgb_to_linear(c.r) + 0.7152 * srgb_to_linear(c.g) + 0.0722 * srgb_to_linear(c.b)
}

/// Contrast ratio between two colors: (L_lighter + 0.05) / (L_darker + 0.05).
/// Symmetric in its arguments and always >= 1.
pub fn contrast_ratio(c1: Rgb, c2: Rgb) -> f64 {
    let l1 = relative_luminance(c1);
    let l2 = relative_luminance(c2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a ratio meets WCAG AA for the given text size.
pub fn meets_aa(ratio: f64, is_large_text: bool) -> bool {
    if is_large_text {
        ratio >= WCAG_AA_LARGE_TEXT
    } else {
        ratio >= WCAG_AA_NORMAL_TEXT
    }
}

/// Classify a ratio against the AA thresholds.
pub fn classify(ratio: f64) -> Compliance {
    if meets_aa(ratio, false) {
        Compliance::Pass
    } else if meets_aa(ratio, true) {
        Compliance::PassLargeOnly
    } else {
        Compliance::Fail
    }
}

/// Display form of a ratio, e.g. `6.09:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}
