use std::fmt;

/// 8-bit RGBA color.
///
/// Themes carry colors as `#rrggbb` strings on the wire; they are parsed into
/// this type once, when the theme is applied, so the renderer never sees an
/// unparsed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
    /// Slate-200, used for translation sub-lines.
    pub const SLATE_200: Rgba = Rgba::rgb(0xe2, 0xe8, 0xf0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => {
                let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::rgb(nib(0)?, nib(1)?, nib(2)?))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?).with_alpha(byte(6)?)),
            _ => None,
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS color string usable as a canvas fill/stroke style.
    pub fn to_css(self) -> String {
        if self.a == 0xff {
            self.to_hex()
        } else {
            format!(
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Rgba::parse_hex("#f59e0b"), Some(Rgba::rgb(0xf5, 0x9e, 0x0b)));
        assert_eq!(Rgba::parse_hex("1c1917"), Some(Rgba::rgb(0x1c, 0x19, 0x17)));
    }

    #[test]
    fn parse_short_and_alpha_forms() {
        assert_eq!(Rgba::parse_hex("#fff"), Some(Rgba::WHITE));
        assert_eq!(
            Rgba::parse_hex("#1c1917e6"),
            Some(Rgba::rgb(0x1c, 0x19, 0x17).with_alpha(0xe6))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Rgba::parse_hex(""), None);
        assert_eq!(Rgba::parse_hex("#12345"), None);
        assert_eq!(Rgba::parse_hex("#gggggg"), None);
        assert_eq!(Rgba::parse_hex("amber"), None);
        assert_eq!(Rgba::parse_hex("#ééé"), None);
        assert_eq!(Rgba::parse_hex("#+f+f+f"), None);
        assert_eq!(Rgba::parse_hex("#-1-1-1"), None);
    }

    #[test]
    fn hex_keeps_alpha_when_translucent() {
        assert_eq!(Rgba::rgb(0x1c, 0x19, 0x17).to_hex(), "#1c1917");
        let translucent = Rgba::rgb(0x1c, 0x19, 0x17).with_alpha(0xe6);
        assert_eq!(translucent.to_hex(), "#1c1917e6");
        assert_eq!(Rgba::parse_hex(&translucent.to_hex()), Some(translucent));
    }

    #[test]
    fn css_output() {
        assert_eq!(Rgba::rgb(0xf5, 0x9e, 0x0b).to_css(), "#f59e0b");
        assert_eq!(Rgba::WHITE.with_alpha(0).to_css(), "rgba(255,255,255,0.000)");
    }
}
