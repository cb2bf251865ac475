//! `parse_color(string) -> [r,g,b,a] | undefined`, the external collaborator named in
//! This scopes out color *policy* (perceptual spaces, named-color tables from
//! a CSS spec edition, etc.) — this is the minimal faithful implementation the curve engine
//! and `color()`/`rgb()`/`rgba()` builtins need to actually run: hex notation, functional
//! `rgb()`/`rgba()` notation, and a small set of CSS keyword colors.
use crate::error::RuntimeError;

/// Parse a CSS-ish color string into `[r, g, b, a]`, each channel normalized to `[0, 1]`.
pub fn parse_color(s: &str) -> Option<[f64; 4]> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(inner) = s.strip_prefix("rgba(").and_then(|v| v.strip_suffix(')')) {
        return parse_functional(inner, true);
    }
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        return parse_functional(inner, false);
    }
    named_color(s)
}

pub fn parse_color_or_err(s: &str) -> Result<[f64; 4], RuntimeError> {
    parse_color(s).ok_or_else(|| RuntimeError::ColorParse(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<[f64; 4]> {
    let expand = |c: char| -> Option<u8> { u8::from_str_radix(&format!("{c}{c}"), 16).ok() };
    let full = |pair: &str| -> Option<u8> { u8::from_str_radix(pair, 16).ok() };

    let channels: Vec<u8> = match hex.len() {
        3 | 4 => hex.chars().map(|c| expand(c)).collect::<Option<Vec<_>>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| full(&hex[i..i + 2]))
            .collect::<Option<Vec<_>>>()?,
        _ => return None,
    };

    let (r, g, b, a) = match channels.as_slice() {
        [r, g, b] => (*r, *g, *b, 255u8),
        [r, g, b, a] => (*r, *g, *b, *a),
        _ => return None,
    };
    Some([r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, a as f64 / 255.0])
}

fn parse_functional(inner: &str, has_alpha: bool) -> Option<[f64; 4]> {
    let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
    let want = if has_alpha { 4 } else { 3 };
    if parts.len() != want {
        return None;
    }
    let channel = |p: &str| -> Option<f64> {
        if let Some(pct) = p.strip_suffix('%') {
            Some(pct.parse::<f64>().ok()? / 100.0)
        } else {
            Some(p.parse::<f64>().ok()? / 255.0)
        }
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if has_alpha { parts[3].parse::<f64>().ok()? } else { 1.0 };
    Some([r, g, b, a])
}

fn named_color(name: &str) -> Option<[f64; 4]> {
    let rgb = match name {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "gray" | "grey" => [128, 128, 128],
        "transparent" => return Some([0.0, 0.0, 0.0, 0.0]),
        _ => return None,
    };
    Some([rgb[0] as f64 / 255.0, rgb[1] as f64 / 255.0, rgb[2] as f64 / 255.0, 1.0])
}

/// Build a color from `0..255` component values, per `rgb()`/`rgba()`.
pub fn from_components(r: f64, g: f64, b: f64, a: f64) -> [f64; 4] {
    [
        (r / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (b / 255.0).clamp(0.0, 1.0),
        a.clamp(0.0, 1.0),
    ]
}
