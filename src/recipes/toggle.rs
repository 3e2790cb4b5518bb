use crate::style::{Fragment, NONE, Property as P, Slot as S, literal, token};
use crate::variant::{AxisSpec, ComponentKind, CompoundRule, Recipe};

crate::axis_enum! {
    pub enum ToggleSize for Toggle."size" {
        Medium => "medium",
        Small => "small",
    }
}

crate::axis_enum! {
    pub enum ToggleStateAxis for Toggle."state" {
        Default => "default",
        Disabled => "disabled",
    }
}

pub const CHECKED_AXIS: &str = "checked";

const SIZE_SMALL: Fragment = &[
    token(S::Root, P::Gap, "space.xs"),
    token(S::Track, P::Width, "size.toggle.track.width.sm"),
    token(S::Track, P::Height, "size.toggle.track.height.sm"),
    token(S::Track, P::Radius, "radius.pill"),
    token(S::Track, P::PaddingX, "space.3xs"),
    token(S::Thumb, P::Width, "size.toggle.thumb.sm"),
    token(S::Thumb, P::Height, "size.toggle.thumb.sm"),
    token(S::Thumb, P::Radius, "radius.pill"),
    token(S::Label, P::FontSize, "font.size.sm"),
    token(S::Label, P::LineHeight, "line.height.sm"),
];

const SIZE_MEDIUM: Fragment = &[
    token(S::Root, P::Gap, "space.sm"),
    token(S::Track, P::Width, "size.toggle.track.width.md"),
    token(S::Track, P::Height, "size.toggle.track.height.md"),
    token(S::Track, P::Radius, "radius.pill"),
    token(S::Track, P::PaddingX, "space.3xs"),
    token(S::Thumb, P::Width, "size.toggle.thumb.md"),
    token(S::Thumb, P::Height, "size.toggle.thumb.md"),
    token(S::Thumb, P::Radius, "radius.pill"),
    token(S::Label, P::FontSize, "font.size.md"),
    token(S::Label, P::LineHeight, "line.height.md"),
];

const UNCHECKED: Fragment = &[
    token(S::Track, P::Background, "color.toggle.track.off"),
    token(S::Thumb, P::Background, "color.toggle.thumb"),
    token(S::Thumb, P::Shadow, "elevation.low"),
    token(S::Label, P::Foreground, "color.text.primary"),
];

const CHECKED: Fragment = &[
    token(S::Track, P::Background, "color.toggle.track.on"),
    token(S::Thumb, P::Background, "color.toggle.thumb"),
    token(S::Thumb, P::Shadow, "elevation.low"),
    token(S::Label, P::Foreground, "color.text.primary"),
];

const STATE_DEFAULT: Fragment = &[
    literal(S::Root, P::Opacity, "1"),
    literal(S::Root, P::Cursor, "pointer"),
];

const STATE_DISABLED: Fragment = &[
    literal(S::Root, P::Opacity, "0.4"),
    literal(S::Root, P::Cursor, "not-allowed"),
    literal(S::Track, P::HoverBackground, NONE),
];

const AXES: &[AxisSpec] = &[
    AxisSpec {
        name: "size",
        default: "medium",
        values: &[("medium", SIZE_MEDIUM), ("small", SIZE_SMALL)],
        aliases: &[],
    },
    AxisSpec {
        name: CHECKED_AXIS,
        default: "false",
        values: &[("false", UNCHECKED), ("true", CHECKED)],
        aliases: &[],
    },
    AxisSpec {
        name: "state",
        default: "default",
        values: &[("default", STATE_DEFAULT), ("disabled", STATE_DISABLED)],
        aliases: &[],
    },
];

const COMPOUNDS: &[CompoundRule] = &[
    CompoundRule {
        when: &[(CHECKED_AXIS, "false"), ("state", "default")],
        apply: &[token(S::Track, P::HoverBackground, "color.border.strong")],
    },
    CompoundRule {
        when: &[(CHECKED_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Track, P::HoverBackground, "color.bg.brand.strong-hover")],
    },
    CompoundRule {
        when: &[(CHECKED_AXIS, "true"), ("state", "disabled")],
        apply: &[token(S::Track, P::Background, "color.bg.brand.subtle-hover")],
    },
];

pub static RECIPE: Recipe = Recipe {
    kind: ComponentKind::Toggle,
    axes: AXES,
    compounds: COMPOUNDS,
    disabled: Some(("state", "disabled")),
    icon_only_axis: None,
    icon_incompatible: &[],
    large_icon_when: &[],
};
