use std::fmt;

use crate::foundation::error::{LightgridError, LightgridResult};

/// Straight (non-premultiplied) RGBA8 color of one rendered cell.
///
/// Any color with `a == 0` is treated as transparent; [`Color::TRANSPARENT`] is the
/// sentinel used for padding and for cells past the end of the buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// The transparent sentinel.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Color from straight RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Opaque gray with all three components set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// `true` when nothing is lit (`a == 0`).
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Components as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Parse `#rrggbb` (opaque) or `#rrggbbaa`. The leading `#` is optional.
    pub fn from_hex(s: &str) -> LightgridResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(LightgridError::validation(format!(
                "color '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| LightgridError::validation(format!("color '{s}' is not valid hex")))
        };

        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Lowercase `#rrggbb`; alpha is not represented.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl From<[u8; 4]> for Color {
    fn from(v: [u8; 4]) -> Self {
        Self::rgba(v[0], v[1], v[2], v[3])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

/// Fixed set of colors offered for quick pixel edits, in display order.
pub const EDIT_PALETTE: [(&str, Color); 8] = [
    ("red", Color::rgb(255, 0, 0)),
    ("blue", Color::rgb(0, 0, 255)),
    ("white", Color::rgb(255, 255, 255)),
    ("yellow", Color::rgb(255, 255, 0)),
    ("green", Color::rgb(0, 255, 0)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("transparent", Color::TRANSPARENT),
];

/// Look up an [`EDIT_PALETTE`] entry by name (ASCII case-insensitive).
pub fn palette_color(name: &str) -> Option<Color> {
    EDIT_PALETTE
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name.trim()))
        .map(|(_, c)| *c)
}

/// Resolve a user color argument: a palette name or a hex string.
pub fn parse_color(s: &str) -> LightgridResult<Color> {
    match palette_color(s) {
        Some(c) => Ok(c),
        None => Color::from_hex(s),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
