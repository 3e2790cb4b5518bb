
use gpui::{FontWeight, Hsla, Rgba, Styled, px};

use crate::id::ComponentId;
use crate::style::{Property, ResolvedStyle, ResolvedValue, Slot, StyleDescriptor};
use crate::tokens::{Color, TokenTable};
use crate::variant::VariantError;

pub fn to_hsla(color: Color) -> Hsla {
    Rgba {
        r: f32::from(color.r) / 255.0,
        g: f32::from(color.g) / 255.0,
        b: f32::from(color.b) / 255.0,
        a: color.a,
    }
    .into()
}

pub fn token_hsla(name: &str) -> Option<Hsla> {
    TokenTable::global().color(name).map(to_hsla)
}

pub fn token_px(name: &str) -> Option<f32> {
    TokenTable::global().dimension(name).map(|dimension| dimension.px())
}

fn literal_f32(style: &ResolvedStyle, slot: Slot, property: Property) -> Option<f32> {
    style.literal(slot, property)?.parse().ok()
}

/// Applies the box properties of `slot`: colors, border, radius, spacing, sizing,
/// opacity, shadow, cursor and alignment.
pub fn apply_box_style<T: Styled>(mut node: T, style: &ResolvedStyle, slot: Slot) -> T {
    if let Some(color) = style.color(slot, Property::Background) {
        node = node.bg(to_hsla(color));
    }
    if let Some(color) = style.color(slot, Property::Foreground) {
        node = node.text_color(to_hsla(color));
    }
    if let Some(color) = style.color(slot, Property::BorderColor) {
        node = node.border_color(to_hsla(color));
    }
    match style.px(slot, Property::BorderWidth) {
        Some(width) if width >= 2.0 => node = node.border_2(),
        Some(width) if width > 0.0 => node = node.border_1(),
        _ => {}
    }
    if let Some(radius) = style.px(slot, Property::Radius) {
        node = node.rounded(px(radius));
    }
    if let Some(value) = style.px(slot, Property::PaddingX) {
        node = node.px(px(value));
    }
    if let Some(value) = style.px(slot, Property::PaddingY) {
        node = node.py(px(value));
    }
    if let Some(value) = style.px(slot, Property::Gap) {
        node = node.gap(px(value));
    }
    if let Some(value) = style.px(slot, Property::Width) {
        node = node.w(px(value));
    }
    if let Some(value) = style.px(slot, Property::Height) {
        node = node.h(px(value));
    }
    if let Some(value) = style.px(slot, Property::MinWidth) {
        node = node.min_w(px(value));
    }
    if let Some(value) = style.px(slot, Property::MaxWidth) {
        node = node.max_w(px(value));
    }
    if let Some(opacity) = literal_f32(style, slot, Property::Opacity) {
        node = node.opacity(opacity);
    }
    node = apply_shadow(node, style.px(slot, Property::Shadow));
    node = match style.literal(slot, Property::Cursor) {
        Some("pointer") => node.cursor_pointer(),
        Some("not-allowed") => node.cursor_not_allowed(),
        Some(_) => node.cursor_default(),
        None => node,
    };
    match style.literal(slot, Property::Justify) {
        Some("center") => node.justify_center(),
        Some("start") => node.justify_start(),
        _ => node,
    }
}

fn apply_shadow<T: Styled>(node: T, elevation: Option<f32>) -> T {
    match elevation {
        Some(value) if value >= 8.0 => node.shadow_lg(),
        Some(value) if value >= 4.0 => node.shadow_md(),
        Some(value) if value > 0.0 => node.shadow_sm(),
        _ => node,
    }
}

/// Applies the typography properties of a text slot.
pub fn apply_text_style<T: Styled>(mut node: T, style: &ResolvedStyle, slot: Slot) -> T {
    if let Some(color) = style.color(slot, Property::Foreground) {
        node = node.text_color(to_hsla(color));
    }
    if let Some(size) = style.px(slot, Property::FontSize) {
        node = node.text_size(px(size));
    }
    if let Some(height) = style.px(slot, Property::LineHeight) {
        node = node.line_height(px(height));
    }
    if let Some(weight) = literal_f32(style, slot, Property::FontWeight) {
        node = node.font_weight(FontWeight(weight));
    }
    if style.literal(slot, Property::TextOverflow) == Some("ellipsis") {
        node = node.truncate();
    }
    node
}

/// Resolves a shell's descriptor against the token table, applying hover styles
/// when `hovered`. Failures are logged and the shell renders unstyled.
pub fn render_style(
    id: &ComponentId,
    descriptor: Result<StyleDescriptor, VariantError>,
    hovered: bool,
) -> ResolvedStyle {
    let resolved = descriptor.and_then(|descriptor| {
        let descriptor = if hovered {
            descriptor.hovered()
        } else {
            descriptor
        };
        descriptor.resolve_tokens(TokenTable::global())
    });
    resolved.unwrap_or_else(|error| {
        log::error!("{id}: {error}");
        ResolvedStyle::default()
    })
}

pub fn icon_px(style: &ResolvedStyle) -> Option<f32> {
    match style.read(Slot::Icon, Property::IconSize)? {
        ResolvedValue::Dimension(dimension) => Some(dimension.px()),
        _ => None,
    }
}
