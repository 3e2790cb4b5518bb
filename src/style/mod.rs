use std::collections::BTreeMap;
use std::fmt;

use crate::tokens::{Color, DimensionToken, TokenTable, TokenValue};
use crate::variant::VariantError;

/// Literal that switches a hover property off.
pub const NONE: &str = "none";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Slot {
    Root,
    Label,
    Icon,
    Subtext,
    Track,
    Thumb,
}

impl Slot {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Label => "label",
            Self::Icon => "icon",
            Self::Subtext => "subtext",
            Self::Track => "track",
            Self::Thumb => "thumb",
        }
    }

    pub const fn is_text(self) -> bool {
        matches!(self, Self::Label | Self::Subtext)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Property {
    Background,
    Foreground,
    BorderColor,
    BorderWidth,
    Radius,
    PaddingX,
    PaddingY,
    Gap,
    Width,
    Height,
    MinWidth,
    MaxWidth,
    FontSize,
    FontWeight,
    LineHeight,
    Opacity,
    Cursor,
    Shadow,
    TextOverflow,
    Justify,
    IconSize,
    HoverBackground,
    HoverBorderColor,
    HoverShadow,
}

impl Property {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::BorderColor => "border-color",
            Self::BorderWidth => "border-width",
            Self::Radius => "radius",
            Self::PaddingX => "padding-x",
            Self::PaddingY => "padding-y",
            Self::Gap => "gap",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinWidth => "min-width",
            Self::MaxWidth => "max-width",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::LineHeight => "line-height",
            Self::Opacity => "opacity",
            Self::Cursor => "cursor",
            Self::Shadow => "shadow",
            Self::TextOverflow => "text-overflow",
            Self::Justify => "justify",
            Self::IconSize => "icon-size",
            Self::HoverBackground => "hover-background",
            Self::HoverBorderColor => "hover-border-color",
            Self::HoverShadow => "hover-shadow",
        }
    }

    /// The base property a hover property replaces while the pointer is over the element.
    pub const fn hover_target(self) -> Option<Self> {
        match self {
            Self::HoverBackground => Some(Self::Background),
            Self::HoverBorderColor => Some(Self::BorderColor),
            Self::HoverShadow => Some(Self::Shadow),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum StyleValue {
    Token(&'static str),
    Literal(&'static str),
}

impl StyleValue {
    pub fn is_none(self) -> bool {
        matches!(self, Self::Literal(NONE))
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(name) => write!(f, "{{{name}}}"),
            Self::Literal(value) => f.write_str(value),
        }
    }
}

/// A single property assignment inside a style fragment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Decl {
    pub slot: Slot,
    pub property: Property,
    pub value: StyleValue,
}

pub const fn token(slot: Slot, property: Property, name: &'static str) -> Decl {
    Decl {
        slot,
        property,
        value: StyleValue::Token(name),
    }
}

pub const fn literal(slot: Slot, property: Property, value: &'static str) -> Decl {
    Decl {
        slot,
        property,
        value: StyleValue::Literal(value),
    }
}

pub type Fragment = &'static [Decl];

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleMap {
    entries: BTreeMap<Property, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: Property, value: StyleValue) -> Self {
        self.entries.insert(property, value);
        self
    }

    pub fn read(&self, property: Property) -> Option<StyleValue> {
        self.entries.get(&property).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, StyleValue)> + '_ {
        self.entries.iter().map(|(property, value)| (*property, *value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The merged output of variant resolution, one [`StyleMap`] per slot.
///
/// Merges are last-writer-wins per `(slot, property)`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StyleDescriptor {
    slots: BTreeMap<Slot, StyleMap>,
}

impl StyleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, fragment: &[Decl]) {
        for decl in fragment {
            self.slots
                .entry(decl.slot)
                .or_default()
                .entries
                .insert(decl.property, decl.value);
        }
    }

    pub fn remove_slot(&mut self, slot: Slot) {
        self.slots.remove(&slot);
    }

    pub fn slot(&self, slot: Slot) -> Option<&StyleMap> {
        self.slots.get(&slot)
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn read(&self, slot: Slot, property: Property) -> Option<StyleValue> {
        self.slots.get(&slot)?.read(property)
    }

    pub fn slots(&self) -> impl Iterator<Item = (Slot, &StyleMap)> + '_ {
        self.slots.iter().map(|(slot, styles)| (*slot, styles))
    }

    pub fn token_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.values().flat_map(|styles| {
            styles.entries.values().filter_map(|value| match value {
                StyleValue::Token(name) => Some(*name),
                StyleValue::Literal(_) => None,
            })
        })
    }

    /// Folds every enabled hover property onto the base property it targets.
    pub fn hovered(&self) -> Self {
        let mut next = self.clone();
        for styles in next.slots.values_mut() {
            let overrides = styles
                .entries
                .iter()
                .filter_map(|(property, value)| {
                    let target = property.hover_target()?;
                    (!value.is_none()).then_some((target, *value))
                })
                .collect::<Vec<_>>();
            for (target, value) in overrides {
                styles.entries.insert(target, value);
            }
        }
        next
    }

    pub fn resolve_tokens(&self, table: &TokenTable) -> Result<ResolvedStyle, VariantError> {
        let mut slots = BTreeMap::new();
        for (slot, styles) in &self.slots {
            let mut resolved = BTreeMap::new();
            for (property, value) in &styles.entries {
                let value = match value {
                    StyleValue::Literal(text) => ResolvedValue::Literal(*text),
                    StyleValue::Token(name) => match table.lookup(name) {
                        Some(TokenValue::Color(raw)) => ResolvedValue::Color(
                            Color::parse(raw)
                                .ok_or_else(|| VariantError::UnknownToken((*name).to_string()))?,
                        ),
                        Some(TokenValue::Dimension(dimension)) => {
                            ResolvedValue::Dimension(dimension)
                        }
                        None => return Err(VariantError::UnknownToken((*name).to_string())),
                    },
                };
                resolved.insert(*property, value);
            }
            slots.insert(*slot, resolved);
        }
        Ok(ResolvedStyle { slots })
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, styles) in &self.slots {
            for (property, value) in &styles.entries {
                writeln!(f, "{}.{}: {value}", slot.as_str(), property.as_str())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedValue {
    Color(Color),
    Dimension(DimensionToken),
    Literal(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedStyle {
    slots: BTreeMap<Slot, BTreeMap<Property, ResolvedValue>>,
}

impl ResolvedStyle {
    pub fn read(&self, slot: Slot, property: Property) -> Option<ResolvedValue> {
        self.slots.get(&slot)?.get(&property).copied()
    }

    pub fn color(&self, slot: Slot, property: Property) -> Option<Color> {
        match self.read(slot, property)? {
            ResolvedValue::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn px(&self, slot: Slot, property: Property) -> Option<f32> {
        match self.read(slot, property)? {
            ResolvedValue::Dimension(dimension) => Some(dimension.px()),
            ResolvedValue::Literal(text) => text.trim_end_matches("px").parse().ok(),
            ResolvedValue::Color(_) => None,
        }
    }

    pub fn literal(&self, slot: Slot, property: Property) -> Option<&'static str> {
        match self.read(slot, property)? {
            ResolvedValue::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn has_slot(&self, slot: Slot) -> bool {
        self.slots.contains_key(&slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Fragment = &[
        token(Slot::Root, Property::Background, "color.bg.surface"),
        token(Slot::Root, Property::HoverBackground, "color.bg.surface-hover"),
        literal(Slot::Root, Property::HoverShadow, NONE),
        literal(Slot::Root, Property::Shadow, "elevation.low"),
    ];

    #[test]
    fn later_merges_win_per_property() {
        let mut descriptor = StyleDescriptor::new();
        descriptor.merge(BASE);
        descriptor.merge(&[token(Slot::Root, Property::Background, "color.bg.brand.strong")]);
        assert_eq!(
            descriptor.read(Slot::Root, Property::Background),
            Some(StyleValue::Token("color.bg.brand.strong"))
        );
        assert_eq!(
            descriptor.read(Slot::Root, Property::HoverBackground),
            Some(StyleValue::Token("color.bg.surface-hover"))
        );
    }

    #[test]
    fn hovered_folds_enabled_hover_properties_only() {
        let mut descriptor = StyleDescriptor::new();
        descriptor.merge(BASE);
        let hovered = descriptor.hovered();
        assert_eq!(
            hovered.read(Slot::Root, Property::Background),
            Some(StyleValue::Token("color.bg.surface-hover"))
        );
        assert_eq!(
            hovered.read(Slot::Root, Property::Shadow),
            Some(StyleValue::Literal("elevation.low"))
        );
    }

    #[test]
    fn resolving_unknown_token_fails() {
        let mut descriptor = StyleDescriptor::new();
        descriptor.merge(&[token(Slot::Root, Property::Background, "color.nope")]);
        assert_eq!(
            descriptor.resolve_tokens(TokenTable::global()),
            Err(VariantError::UnknownToken("color.nope".to_string()))
        );
    }

    #[test]
    fn resolving_maps_tokens_to_literal_values() {
        let mut descriptor = StyleDescriptor::new();
        descriptor.merge(&[
            token(Slot::Root, Property::Background, "color.white"),
            token(Slot::Root, Property::PaddingX, "space.lg"),
            literal(Slot::Root, Property::Opacity, "0.4"),
        ]);
        let resolved = descriptor
            .resolve_tokens(TokenTable::global())
            .expect("tokens resolve");
        assert_eq!(
            resolved.color(Slot::Root, Property::Background),
            Some(Color::rgb(255, 255, 255))
        );
        assert_eq!(resolved.px(Slot::Root, Property::PaddingX), Some(16.0));
        assert_eq!(resolved.literal(Slot::Root, Property::Opacity), Some("0.4"));
    }
}
