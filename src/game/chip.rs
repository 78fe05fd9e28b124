/// An RGBA color. Chips are told apart by color only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 215, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const AQUA: Color = Color::rgb(0, 255, 255);
    pub const PINK: Color = Color::rgb(255, 105, 180);
    pub const BROWN: Color = Color::rgb(139, 69, 19);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Named colors, in the order default players receive them.
    pub const PALETTE: [(&'static str, Color); 10] = [
        ("red", Color::RED),
        ("blue", Color::BLUE),
        ("yellow", Color::YELLOW),
        ("green", Color::GREEN),
        ("orange", Color::ORANGE),
        ("purple", Color::PURPLE),
        ("aqua", Color::AQUA),
        ("pink", Color::PINK),
        ("brown", Color::BROWN),
        ("gray", Color::GRAY),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Resolve a palette name (case-insensitive) or a `#rrggbb` hex string.
    pub fn from_name(name: &str) -> Option<Color> {
        let name = name.trim();
        if let Some(hex) = name.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            return Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        Color::PALETTE
            .iter()
            .find(|(palette_name, _)| palette_name.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
    }

    /// Palette name of this color, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        Color::PALETTE
            .iter()
            .find(|(_, color)| color == self)
            .map(|&(name, _)| name)
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// A chip, identified by its color. The transparent chip marks an empty slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chip {
    color: Color,
}

impl Chip {
    pub const EMPTY: Chip = Chip {
        color: Color::TRANSPARENT,
    };

    pub const fn new(color: Color) -> Self {
        Chip { color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        *self == Chip::EMPTY
    }
}

impl Default for Chip {
    fn default() -> Self {
        Chip::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_equality_is_by_color() {
        assert_eq!(Chip::new(Color::RED), Chip::new(Color::rgb(255, 0, 0)));
        assert_ne!(Chip::new(Color::RED), Chip::new(Color::BLUE));
    }

    #[test]
    fn test_empty_chip() {
        assert!(Chip::EMPTY.is_empty());
        assert!(Chip::default().is_empty());
        assert!(!Chip::new(Color::YELLOW).is_empty());
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("Red"), Some(Color::RED));
        assert_eq!(Color::from_name(" purple "), Some(Color::PURPLE));
        assert_eq!(Color::from_name("#0000ff"), Some(Color::BLUE));
        assert_eq!(Color::from_name("#12345"), None);
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn test_palette_is_distinct() {
        for (i, (_, a)) in Color::PALETTE.iter().enumerate() {
            assert!(!a.is_transparent());
            for (_, b) in &Color::PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Color::GREEN.name(), Some("green"));
        assert_eq!(Color::rgb(1, 2, 3).name(), None);
    }
}
