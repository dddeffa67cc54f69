use crate::constants::DARK_LUMINANCE_CUTOFF;
use fnv::FnvHashMap;
use std::sync::OnceLock;

pub const DEFAULT_SECTION_COLOR: &str = "#fff";

fn color_table() -> &'static FnvHashMap<&'static str, &'static str> {
    static TABLE: OnceLock<FnvHashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut m = FnvHashMap::default();
        m.insert("Latest", "#ff6b6b");
        m.insert("Trending", "#feca57");
        m.insert("Collections", "#48dbfb");
        m.insert("Stories", "#1dd1a1");
        m
    })
}

/// Theme color for a section name, falling back to the default when no entry
/// is registered.
#[inline]
pub fn color_for(name: &str) -> &'static str {
    color_table()
        .get(name)
        .copied()
        .unwrap_or(DEFAULT_SECTION_COLOR)
}

/// Parses `#rgb` or `#rrggbb` into channel bytes.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let d = c.to_digit(16)? as u8;
                out[i] = d * 17; // f -> ff
            }
            Some(out)
        }
        6 => {
            let mut out = [0u8; 3];
            for i in 0..3 {
                out[i] = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(out)
        }
        _ => None,
    }
}

/// Standard luminance test used to pick a contrasting icon color on top of a
/// section's theme color. Unparseable colors count as light.
pub fn is_dark(hex: &str) -> bool {
    match parse_hex(hex) {
        Some([r, g, b]) => {
            let lum = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            lum < DARK_LUMINANCE_CUTOFF
        }
        None => false,
    }
}
