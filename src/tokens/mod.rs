use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Pixel to native layout unit factor carried by every dimension token.
pub const SCALE_MULTIPLIER: f32 = 0.75;

/// One length in the four representations the token export carries.
///
/// Every field derives from a single pixel literal through `dimension!`, so the
/// representations cannot drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionToken {
    pub original: &'static str,
    pub number: f32,
    pub decimal: f32,
    pub scale: f32,
}

macro_rules! dimension {
    ($px:literal) => {
        $crate::tokens::DimensionToken {
            original: concat!(stringify!($px), "px"),
            number: $px as f32,
            decimal: $px as f32 / 100.0,
            scale: $px as f32 * $crate::tokens::SCALE_MULTIPLIER,
        }
    };
}

pub mod generated;
pub mod semantic;

impl DimensionToken {
    pub fn px(&self) -> f32 {
        self.number
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa` and `rgba(r, g, b, a)`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Some(hex) = raw.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        let inner = raw
            .strip_prefix("rgba(")
            .or_else(|| raw.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        let a = match parts.next() {
            Some(alpha) => alpha.parse::<f32>().ok()?.clamp(0.0, 1.0),
            None => 1.0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(hex.get(range)?, 16).ok();
        match hex.len() {
            3 => {
                let expand = |ix: usize| channel(ix..ix + 1).map(|v| v * 17);
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: f32::from(channel(6..8)?) / 255.0,
            }),
            _ => None,
        }
    }

    pub fn relative_luminance(&self) -> f32 {
        let linear = |channel: u8| {
            let value = f32::from(channel) / 255.0;
            if value <= 0.03928 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

/// WCAG contrast ratio between two opaque colors, in `1.0..=21.0`.
pub fn contrast_ratio(first: Color, second: Color) -> f32 {
    let l1 = first.relative_luminance();
    let l2 = second.relative_luminance();
    let (hi, lo) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (hi + 0.05) / (lo + 0.05)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenValue {
    Color(&'static str),
    Dimension(DimensionToken),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(value) => f.write_str(value),
            Self::Dimension(value) => f.write_str(value.original),
        }
    }
}

/// The read-only token table. Primitive entries come straight from the
/// generated registries; semantic entries point at exactly one primitive.
#[derive(Debug)]
pub struct TokenTable {
    primitives: BTreeMap<&'static str, TokenValue>,
    semantic: BTreeMap<&'static str, &'static str>,
}

static GLOBAL_TABLE: LazyLock<TokenTable> = LazyLock::new(|| {
    let table = TokenTable::from_registries(
        generated::COLOR_TOKENS,
        generated::DIMENSION_TOKENS,
        semantic::SEMANTIC_TOKENS,
    );
    log::debug!(
        "token table loaded: {} primitives, {} semantic",
        table.primitives.len(),
        table.semantic.len()
    );
    table
});

impl TokenTable {
    pub fn global() -> &'static TokenTable {
        &GLOBAL_TABLE
    }

    pub fn from_registries(
        colors: &[(&'static str, &'static str)],
        dimensions: &[(&'static str, DimensionToken)],
        semantic: &[(&'static str, &'static str)],
    ) -> Self {
        let mut primitives = BTreeMap::new();
        for (name, value) in colors {
            primitives.insert(*name, TokenValue::Color(*value));
        }
        for (name, value) in dimensions {
            primitives.insert(*name, TokenValue::Dimension(*value));
        }
        Self {
            primitives,
            semantic: semantic.iter().copied().collect(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<TokenValue> {
        if let Some(value) = self.primitives.get(name) {
            return Some(*value);
        }
        let target = self.semantic.get(name)?;
        self.primitives.get(target).copied()
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        match self.lookup(name)? {
            TokenValue::Color(raw) => Color::parse(raw),
            TokenValue::Dimension(_) => None,
        }
    }

    pub fn dimension(&self, name: &str) -> Option<DimensionToken> {
        match self.lookup(name)? {
            TokenValue::Dimension(value) => Some(value),
            TokenValue::Color(_) => None,
        }
    }

    pub fn semantic_target(&self, name: &str) -> Option<&'static str> {
        self.semantic.get(name).copied()
    }

    pub fn is_semantic(&self, name: &str) -> bool {
        self.semantic.contains_key(name)
    }

    pub fn primitive_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.primitives.keys().copied()
    }

    pub fn semantic_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.semantic.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_fields_derive_from_pixel_value() {
        for (name, token) in generated::DIMENSION_TOKENS {
            assert_eq!(token.original, format!("{}px", token.number), "{name}");
            assert_eq!(token.decimal, token.number / 100.0, "{name}");
            assert_eq!(token.scale, token.number * SCALE_MULTIPLIER, "{name}");
        }
    }

    #[test]
    fn every_color_token_parses() {
        for (name, raw) in generated::COLOR_TOKENS {
            assert!(Color::parse(raw).is_some(), "{name} = {raw}");
        }
    }

    #[test]
    fn token_names_are_unique() {
        let table = TokenTable::global();
        let total = generated::COLOR_TOKENS.len() + generated::DIMENSION_TOKENS.len();
        assert_eq!(table.primitive_names().count(), total);
        assert_eq!(table.semantic_names().count(), semantic::SEMANTIC_TOKENS.len());
    }

    #[test]
    fn semantic_tokens_point_at_primitives_one_level_deep() {
        let table = TokenTable::global();
        for (name, target) in semantic::SEMANTIC_TOKENS {
            assert!(!table.is_semantic(target), "{name} targets semantic {target}");
            assert!(
                table.primitive_names().any(|primitive| primitive == *target),
                "{name} targets unknown {target}"
            );
        }
    }

    #[test]
    fn semantic_lookup_resolves_to_primitive_value() {
        let table = TokenTable::global();
        assert_eq!(
            table.lookup("color.bg.alert.subtle"),
            Some(TokenValue::Color(generated::COLOR_RED_100))
        );
        assert_eq!(table.lookup("color.does.not.exist"), None);
        assert_eq!(table.dimension("space.lg").map(|d| d.px()), Some(16.0));
        assert!(table.color("space.lg").is_none());
    }

    #[test]
    fn paired_semantic_colors_keep_minimum_contrast() {
        let table = TokenTable::global();
        for category in semantic::CONTRAST_CATEGORIES {
            for role in ["subtle", "strong"] {
                let bg = table
                    .color(&format!("color.bg.{category}.{role}"))
                    .expect("background exists");
                let fg = table
                    .color(&format!("color.text.{category}.{role}"))
                    .expect("foreground exists");
                let ratio = contrast_ratio(fg, bg);
                assert!(ratio >= 4.5, "{category}/{role} contrast {ratio:.2}");
            }
        }
    }

    #[test]
    fn color_parse_handles_both_syntaxes() {
        assert_eq!(Color::parse("#fff"), Some(Color::rgb(255, 255, 255)));
        assert_eq!(Color::parse("#0b4f9e"), Some(Color::rgb(11, 79, 158)));
        let translucent = Color::parse("rgba(0, 0, 0, 0.4)").expect("rgba parses");
        assert_eq!((translucent.r, translucent.a), (0, 0.4));
        assert!(Color::parse("rgba(0, 0)").is_none());
        assert!(Color::parse("#12345").is_none());
    }
}
