use crate::style::{Fragment, NONE, Property as P, Slot as S, literal, token};
use crate::variant::{AxisSpec, ComponentKind, CompoundRule, Recipe};

crate::axis_enum! {
    pub enum CardVariant for Card."variant" {
        Default => "default",
        Interactive => "interactive",
        Outlined => "outlined",
    }
}

crate::axis_enum! {
    pub enum CardPadding for Card."padding" {
        Medium => "medium",
        None => "none",
        Small => "small",
        Large => "large",
    }
}

crate::axis_enum! {
    pub enum CardElevation for Card."elevation" {
        Low => "low",
        None => "none",
        High => "high",
    }
}

crate::axis_enum! {
    pub enum CardState for Card."state" {
        Default => "default",
        Disabled => "disabled",
    }
}

const VARIANT_DEFAULT: Fragment = &[
    token(S::Root, P::Background, "color.bg.surface"),
    token(S::Root, P::Foreground, "color.text.primary"),
    token(S::Root, P::BorderColor, "color.border.default"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    token(S::Root, P::Radius, "radius.lg"),
    literal(S::Root, P::Cursor, "default"),
];

const VARIANT_INTERACTIVE: Fragment = &[
    token(S::Root, P::Background, "color.bg.surface"),
    token(S::Root, P::Foreground, "color.text.primary"),
    token(S::Root, P::BorderColor, "color.border.default"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    token(S::Root, P::Radius, "radius.lg"),
    literal(S::Root, P::Cursor, "pointer"),
];

const VARIANT_OUTLINED: Fragment = &[
    token(S::Root, P::Background, "color.bg.transparent"),
    token(S::Root, P::Foreground, "color.text.primary"),
    token(S::Root, P::BorderColor, "color.border.strong"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    token(S::Root, P::Radius, "radius.lg"),
    literal(S::Root, P::Cursor, "default"),
];

const PADDING_NONE: Fragment = &[
    token(S::Root, P::PaddingX, "space.none"),
    token(S::Root, P::PaddingY, "space.none"),
];

const PADDING_SMALL: Fragment = &[
    token(S::Root, P::PaddingX, "space.sm"),
    token(S::Root, P::PaddingY, "space.sm"),
];

const PADDING_MEDIUM: Fragment = &[
    token(S::Root, P::PaddingX, "space.lg"),
    token(S::Root, P::PaddingY, "space.lg"),
];

const PADDING_LARGE: Fragment = &[
    token(S::Root, P::PaddingX, "space.xl"),
    token(S::Root, P::PaddingY, "space.xl"),
];

const ELEVATION_NONE: Fragment = &[token(S::Root, P::Shadow, "elevation.none")];
const ELEVATION_LOW: Fragment = &[token(S::Root, P::Shadow, "elevation.low")];
const ELEVATION_HIGH: Fragment = &[token(S::Root, P::Shadow, "elevation.high")];

const STATE_DEFAULT: Fragment = &[literal(S::Root, P::Opacity, "1")];

const STATE_DISABLED: Fragment = &[
    literal(S::Root, P::Opacity, "0.4"),
    literal(S::Root, P::Cursor, "not-allowed"),
    literal(S::Root, P::HoverBackground, NONE),
    literal(S::Root, P::HoverBorderColor, NONE),
    literal(S::Root, P::HoverShadow, NONE),
];

const AXES: &[AxisSpec] = &[
    AxisSpec {
        name: "variant",
        default: "default",
        values: &[
            ("default", VARIANT_DEFAULT),
            ("interactive", VARIANT_INTERACTIVE),
            ("outlined", VARIANT_OUTLINED),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: "padding",
        default: "medium",
        values: &[
            ("medium", PADDING_MEDIUM),
            ("none", PADDING_NONE),
            ("small", PADDING_SMALL),
            ("large", PADDING_LARGE),
        ],
        aliases: &[],
    },
    AxisSpec {
        name: "elevation",
        default: "low",
        values: &[
            ("low", ELEVATION_LOW),
            ("none", ELEVATION_NONE),
            ("high", ELEVATION_HIGH),
        ],
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
    // Outlined cards stay flat whatever elevation was asked for.
    CompoundRule {
        when: &[("variant", "outlined")],
        apply: &[token(S::Root, P::Shadow, "elevation.none")],
    },
    CompoundRule {
        when: &[("variant", "interactive"), ("state", "default")],
        apply: &[
            token(S::Root, P::HoverBackground, "color.bg.surface-hover"),
            token(S::Root, P::HoverBorderColor, "color.border.strong"),
            token(S::Root, P::HoverShadow, "elevation.low"),
        ],
    },
    CompoundRule {
        when: &[
            ("variant", "interactive"),
            ("elevation", "high"),
            ("state", "default"),
        ],
        apply: &[token(S::Root, P::HoverShadow, "elevation.high")],
    },
];

pub static RECIPE: Recipe = Recipe {
    kind: ComponentKind::Card,
    axes: AXES,
    compounds: COMPOUNDS,
    disabled: Some(("state", "disabled")),
    icon_only_axis: None,
    icon_incompatible: &[],
    large_icon_when: &[],
};
