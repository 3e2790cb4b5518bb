use crate::style::{Fragment, NONE, Property as P, Slot as S, literal, token};
use crate::variant::{AxisSpec, ComponentKind, CompoundRule, Recipe};

crate::axis_enum! {
    pub enum ButtonType for Button."type" {
        Primary => "primary",
        Secondary => "secondary",
        Tertiary => "tertiary",
        Transparent => "transparent",
        Destructive => "destructive",
    }
}

crate::axis_enum! {
    pub enum ButtonSize for Button."size" {
        Medium => "medium",
        Small => "small",
        Large => "large",
    }
}

crate::axis_enum! {
    pub enum ButtonState for Button."state" {
        Default => "default",
        Disabled => "disabled",
    }
}

pub const ICON_ONLY_AXIS: &str = "icon_only";

const TYPE_PRIMARY: Fragment = &[
    token(S::Root, P::Background, "color.bg.brand.strong"),
    token(S::Root, P::Foreground, "color.text.brand.strong"),
    token(S::Root, P::BorderColor, "color.bg.brand.strong"),
    token(S::Root, P::HoverBackground, "color.bg.brand.strong-hover"),
];

const TYPE_SECONDARY: Fragment = &[
    token(S::Root, P::Background, "color.bg.surface"),
    token(S::Root, P::Foreground, "color.text.brand.subtle"),
    token(S::Root, P::BorderColor, "color.border.brand"),
    token(S::Root, P::HoverBackground, "color.bg.brand.subtle"),
];

const TYPE_TERTIARY: Fragment = &[
    token(S::Root, P::Background, "color.bg.neutral.subtle"),
    token(S::Root, P::Foreground, "color.text.primary"),
    token(S::Root, P::BorderColor, "color.bg.neutral.subtle"),
    token(S::Root, P::HoverBackground, "color.bg.neutral.subtle-hover"),
];

const TYPE_TRANSPARENT: Fragment = &[
    token(S::Root, P::Background, "color.bg.transparent"),
    token(S::Root, P::Foreground, "color.text.brand.subtle"),
    token(S::Root, P::BorderColor, "color.bg.transparent"),
    literal(S::Root, P::HoverBackground, NONE),
];

const TYPE_DESTRUCTIVE: Fragment = &[
    token(S::Root, P::Background, "color.bg.alert.strong"),
    token(S::Root, P::Foreground, "color.text.alert.strong"),
    token(S::Root, P::BorderColor, "color.bg.alert.strong"),
    literal(S::Root, P::HoverBackground, NONE),
];

const SIZE_SMALL: Fragment = &[
    token(S::Root, P::Height, "size.control.sm"),
    token(S::Root, P::PaddingX, "space.md"),
    token(S::Root, P::Gap, "space.2xs"),
    token(S::Root, P::Radius, "radius.sm"),
    token(S::Label, P::FontSize, "font.size.sm"),
    token(S::Label, P::LineHeight, "line.height.sm"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const SIZE_MEDIUM: Fragment = &[
    token(S::Root, P::Height, "size.control.md"),
    token(S::Root, P::PaddingX, "space.lg"),
    token(S::Root, P::Gap, "space.xs"),
    token(S::Root, P::Radius, "radius.md"),
    token(S::Label, P::FontSize, "font.size.md"),
    token(S::Label, P::LineHeight, "line.height.md"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const SIZE_LARGE: Fragment = &[
    token(S::Root, P::Height, "size.control.lg"),
    token(S::Root, P::PaddingX, "space.xl"),
    token(S::Root, P::Gap, "space.sm"),
    token(S::Root, P::Radius, "radius.md"),
    token(S::Label, P::FontSize, "font.size.lg"),
    token(S::Label, P::LineHeight, "line.height.lg"),
    token(S::Icon, P::IconSize, "size.icon.lg"),
];

const STATE_DEFAULT: Fragment = &[
    literal(S::Root, P::Opacity, "1"),
    literal(S::Root, P::Cursor, "pointer"),
];

const STATE_DISABLED: Fragment = &[
    literal(S::Root, P::Opacity, "0.4"),
    literal(S::Root, P::Cursor, "not-allowed"),
    literal(S::Root, P::HoverBackground, NONE),
    literal(S::Root, P::HoverBorderColor, NONE),
];

const WITH_TEXT: Fragment = &[
    token(S::Root, P::BorderWidth, "border.width.thin"),
    literal(S::Root, P::Justify, "center"),
    literal(S::Label, P::FontWeight, "600"),
];

const ICON_ONLY: Fragment = &[
    token(S::Root, P::BorderWidth, "border.width.thin"),
    token(S::Root, P::PaddingX, "space.none"),
    literal(S::Root, P::Justify, "center"),
];

const AXES: &[AxisSpec] = &[
    AxisSpec {
        name: "type",
        default: "primary",
        values: &[
            ("primary", TYPE_PRIMARY),
            ("secondary", TYPE_SECONDARY),
            ("tertiary", TYPE_TERTIARY),
            ("transparent", TYPE_TRANSPARENT),
            ("destructive", TYPE_DESTRUCTIVE),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: "size",
        default: "medium",
        values: &[
            ("medium", SIZE_MEDIUM),
            ("small", SIZE_SMALL),
            ("large", SIZE_LARGE),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: ICON_ONLY_AXIS,
        default: "false",
        values: &[("false", WITH_TEXT), ("true", ICON_ONLY)],
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
        when: &[("type", "transparent"), ("state", "default")],
        apply: &[token(
            S::Root,
            P::HoverBackground,
            "color.bg.transparent-hover",
        )],
    },
    CompoundRule {
        when: &[("type", "destructive"), ("state", "default")],
        apply: &[token(
            S::Root,
            P::HoverBackground,
            "color.bg.alert.strong-hover",
        )],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "small")],
        apply: &[
            token(S::Root, P::Width, "size.control.sm"),
            token(S::Root, P::MinWidth, "size.control.sm"),
        ],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "medium")],
        apply: &[
            token(S::Root, P::Width, "size.control.md"),
            token(S::Root, P::MinWidth, "size.control.md"),
        ],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "large")],
        apply: &[
            token(S::Root, P::Width, "size.control.lg"),
            token(S::Root, P::MinWidth, "size.control.lg"),
        ],
    },
];

pub static RECIPE: Recipe = Recipe {
    kind: ComponentKind::Button,
    axes: AXES,
    compounds: COMPOUNDS,
    disabled: Some(("state", "disabled")),
    icon_only_axis: Some(ICON_ONLY_AXIS),
    icon_incompatible: &[],
    large_icon_when: &[("size", "large")],
};
