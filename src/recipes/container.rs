use crate::style::{Fragment, NONE, Property as P, Slot as S, literal, token};
use crate::variant::{AxisSpec, ComponentKind, CompoundRule, Recipe};

crate::axis_enum! {
    pub enum ContainerType for Container."type" {
        Default => "default",
        Subtle => "subtle",
        Info => "info",
        Positive => "positive",
        Warning => "warning",
        Alert => "alert",
    }
}

crate::axis_enum! {
    pub enum ContainerPadding for Container."padding" {
        Medium => "medium",
        Small => "small",
        Large => "large",
    }
}

crate::axis_enum! {
    pub enum ContainerState for Container."state" {
        Default => "default",
        Disabled => "disabled",
    }
}

pub const INTERACTIVE_AXIS: &str = "interactive";

const TYPE_DEFAULT: Fragment = &[
    token(S::Root, P::Background, "color.bg.surface"),
    token(S::Root, P::Foreground, "color.text.primary"),
    token(S::Root, P::BorderColor, "color.border.default"),
];

const TYPE_SUBTLE: Fragment = &[
    token(S::Root, P::Background, "color.bg.neutral.subtle"),
    token(S::Root, P::Foreground, "color.text.neutral.subtle"),
    token(S::Root, P::BorderColor, "color.border.neutral"),
];

const TYPE_INFO: Fragment = &[
    token(S::Root, P::Background, "color.bg.info.subtle"),
    token(S::Root, P::Foreground, "color.text.info.subtle"),
    token(S::Root, P::BorderColor, "color.border.info"),
];

const TYPE_POSITIVE: Fragment = &[
    token(S::Root, P::Background, "color.bg.positive.subtle"),
    token(S::Root, P::Foreground, "color.text.positive.subtle"),
    token(S::Root, P::BorderColor, "color.border.positive"),
];

const TYPE_WARNING: Fragment = &[
    token(S::Root, P::Background, "color.bg.warning.subtle"),
    token(S::Root, P::Foreground, "color.text.warning.subtle"),
    token(S::Root, P::BorderColor, "color.border.warning"),
];

const TYPE_ALERT: Fragment = &[
    token(S::Root, P::Background, "color.bg.alert.subtle"),
    token(S::Root, P::Foreground, "color.text.alert.subtle"),
    token(S::Root, P::BorderColor, "color.border.alert"),
];

const PADDING_SMALL: Fragment = &[
    token(S::Root, P::PaddingX, "space.sm"),
    token(S::Root, P::PaddingY, "space.sm"),
    token(S::Root, P::Gap, "space.xs"),
];

const PADDING_MEDIUM: Fragment = &[
    token(S::Root, P::PaddingX, "space.lg"),
    token(S::Root, P::PaddingY, "space.lg"),
    token(S::Root, P::Gap, "space.sm"),
];

const PADDING_LARGE: Fragment = &[
    token(S::Root, P::PaddingX, "space.xl"),
    token(S::Root, P::PaddingY, "space.xl"),
    token(S::Root, P::Gap, "space.md"),
];

const STATIC: Fragment = &[
    token(S::Root, P::Radius, "radius.md"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    literal(S::Root, P::Cursor, "default"),
    literal(S::Root, P::HoverBackground, NONE),
];

const INTERACTIVE: Fragment = &[
    token(S::Root, P::Radius, "radius.md"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    literal(S::Root, P::Cursor, "pointer"),
];

const STATE_DEFAULT: Fragment = &[literal(S::Root, P::Opacity, "1")];

const STATE_DISABLED: Fragment = &[
    literal(S::Root, P::Opacity, "0.4"),
    literal(S::Root, P::Cursor, "not-allowed"),
    literal(S::Root, P::HoverBackground, NONE),
];

const AXES: &[AxisSpec] = &[
    AxisSpec {
        name: "type",
        default: "default",
        values: &[
            ("default", TYPE_DEFAULT),
            ("subtle", TYPE_SUBTLE),
            ("info", TYPE_INFO),
            ("positive", TYPE_POSITIVE),
            ("warning", TYPE_WARNING),
            ("alert", TYPE_ALERT),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: "padding",
        default: "medium",
        values: &[
            ("medium", PADDING_MEDIUM),
            ("small", PADDING_SMALL),
            ("large", PADDING_LARGE),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: INTERACTIVE_AXIS,
        default: "false",
        values: &[("false", STATIC), ("true", INTERACTIVE)],
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
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "default"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.surface-hover")],
    },
    CompoundRule {
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "subtle"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.neutral.subtle-hover")],
    },
    CompoundRule {
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "info"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.info.subtle-hover")],
    },
    CompoundRule {
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "positive"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.positive.subtle-hover")],
    },
    CompoundRule {
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "warning"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.warning.subtle-hover")],
    },
    CompoundRule {
        when: &[(INTERACTIVE_AXIS, "true"), ("type", "alert"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.alert.subtle-hover")],
    },
];

pub static RECIPE: Recipe = Recipe {
    kind: ComponentKind::Container,
    axes: AXES,
    compounds: COMPOUNDS,
    disabled: Some(("state", "disabled")),
    icon_only_axis: None,
    icon_incompatible: &[],
    large_icon_when: &[],
};
