use crate::style::{Fragment, NONE, Property as P, Slot as S, literal, token};
use crate::variant::{AxisSpec, ComponentKind, CompoundRule, Recipe};

crate::axis_enum! {
    pub enum PillType for Pill."type" {
        Neutral => "neutral",
        Info => "info",
        Positive => "positive",
        Warning => "warning",
        Alert => "alert",
        /// Deprecated spelling of [`PillType::Alert`].
        HighAlert => "high-alert",
        /// Deprecated spelling of [`PillType::Info`].
        ImportantInfo => "important-info",
    }
}

impl PillType {
    /// The non-deprecated type this value renders as.
    pub fn canonical(self) -> Self {
        match self {
            Self::HighAlert => Self::Alert,
            Self::ImportantInfo => Self::Info,
            other => other,
        }
    }

    pub fn is_deprecated(self) -> bool {
        self.canonical() != self
    }
}

crate::axis_enum! {
    pub enum PillSize for Pill."size" {
        Medium => "medium",
        XSmall => "x-small",
        Small => "small",
        Large => "large",
    }
}

crate::axis_enum! {
    pub enum PillState for Pill."state" {
        Default => "default",
        Disabled => "disabled",
    }
}

pub const INTERACTIVE_AXIS: &str = "interactive";
pub const TRUNCATE_AXIS: &str = "truncate";
pub const ICON_ONLY_AXIS: &str = "icon_only";

const TYPE_NEUTRAL: Fragment = &[
    token(S::Root, P::Background, "color.bg.neutral.subtle"),
    token(S::Root, P::Foreground, "color.text.neutral.subtle"),
    token(S::Root, P::BorderColor, "color.border.neutral"),
    literal(S::Root, P::HoverBackground, NONE),
];

const TYPE_INFO: Fragment = &[
    token(S::Root, P::Background, "color.bg.info.subtle"),
    token(S::Root, P::Foreground, "color.text.info.subtle"),
    token(S::Root, P::BorderColor, "color.border.info"),
    literal(S::Root, P::HoverBackground, NONE),
];

const TYPE_POSITIVE: Fragment = &[
    token(S::Root, P::Background, "color.bg.positive.subtle"),
    token(S::Root, P::Foreground, "color.text.positive.subtle"),
    token(S::Root, P::BorderColor, "color.border.positive"),
    literal(S::Root, P::HoverBackground, NONE),
];

const TYPE_WARNING: Fragment = &[
    token(S::Root, P::Background, "color.bg.warning.subtle"),
    token(S::Root, P::Foreground, "color.text.warning.subtle"),
    token(S::Root, P::BorderColor, "color.border.warning"),
    literal(S::Root, P::HoverBackground, NONE),
];

const TYPE_ALERT: Fragment = &[
    token(S::Root, P::Background, "color.bg.alert.subtle"),
    token(S::Root, P::Foreground, "color.text.alert.subtle"),
    token(S::Root, P::BorderColor, "color.border.alert"),
    literal(S::Root, P::HoverBackground, NONE),
];

const SIZE_X_SMALL: Fragment = &[
    token(S::Root, P::Height, "size.pill.xs"),
    token(S::Root, P::PaddingX, "space.2xs"),
    token(S::Root, P::Gap, "space.3xs"),
    token(S::Label, P::FontSize, "font.size.xs"),
    token(S::Label, P::LineHeight, "line.height.xs"),
    token(S::Subtext, P::FontSize, "font.size.xs"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const SIZE_SMALL: Fragment = &[
    token(S::Root, P::Height, "size.pill.sm"),
    token(S::Root, P::PaddingX, "space.xs"),
    token(S::Root, P::Gap, "space.2xs"),
    token(S::Label, P::FontSize, "font.size.xs"),
    token(S::Label, P::LineHeight, "line.height.xs"),
    token(S::Subtext, P::FontSize, "font.size.xs"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const SIZE_MEDIUM: Fragment = &[
    token(S::Root, P::Height, "size.pill.md"),
    token(S::Root, P::PaddingX, "space.sm"),
    token(S::Root, P::Gap, "space.2xs"),
    token(S::Label, P::FontSize, "font.size.sm"),
    token(S::Label, P::LineHeight, "line.height.sm"),
    token(S::Subtext, P::FontSize, "font.size.xs"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const SIZE_LARGE: Fragment = &[
    token(S::Root, P::Height, "size.pill.lg"),
    token(S::Root, P::PaddingX, "space.md"),
    token(S::Root, P::Gap, "space.xs"),
    token(S::Label, P::FontSize, "font.size.md"),
    token(S::Label, P::LineHeight, "line.height.md"),
    token(S::Subtext, P::FontSize, "font.size.sm"),
    token(S::Icon, P::IconSize, "size.icon.sm"),
];

const STATIC: Fragment = &[
    token(S::Root, P::Radius, "radius.pill"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    literal(S::Root, P::Cursor, "default"),
    token(S::Subtext, P::Foreground, "color.text.secondary"),
    literal(S::Label, P::FontWeight, "500"),
];

const INTERACTIVE: Fragment = &[
    token(S::Root, P::Radius, "radius.pill"),
    token(S::Root, P::BorderWidth, "border.width.thin"),
    literal(S::Root, P::Cursor, "pointer"),
    token(S::Subtext, P::Foreground, "color.text.secondary"),
    literal(S::Label, P::FontWeight, "500"),
];

const NO_TRUNCATE: Fragment = &[literal(S::Label, P::TextOverflow, "clip")];

const TRUNCATE: Fragment = &[
    literal(S::Label, P::TextOverflow, "ellipsis"),
    token(S::Root, P::MaxWidth, "size.pill.truncate"),
];

const WITH_TEXT: Fragment = &[literal(S::Root, P::Justify, "start")];

const ICON_ONLY: Fragment = &[
    token(S::Root, P::PaddingX, "space.none"),
    literal(S::Root, P::Justify, "center"),
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
        default: "neutral",
        values: &[
            ("neutral", TYPE_NEUTRAL),
            ("info", TYPE_INFO),
            ("positive", TYPE_POSITIVE),
            ("warning", TYPE_WARNING),
            ("alert", TYPE_ALERT),
        ],
        aliases: &[("high-alert", "alert"), ("important-info", "info")],
    },
    AxisSpec {
        name: "size",
        default: "medium",
        values: &[
            ("medium", SIZE_MEDIUM),
            ("x-small", SIZE_X_SMALL),
            ("small", SIZE_SMALL),
            ("large", SIZE_LARGE),
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
        name: TRUNCATE_AXIS,
        default: "false",
        values: &[("false", NO_TRUNCATE), ("true", TRUNCATE)],
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
        when: &[("type", "neutral"), (INTERACTIVE_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.neutral.subtle-hover")],
    },
    CompoundRule {
        when: &[("type", "info"), (INTERACTIVE_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.info.subtle-hover")],
    },
    CompoundRule {
        when: &[("type", "positive"), (INTERACTIVE_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.positive.subtle-hover")],
    },
    CompoundRule {
        when: &[("type", "warning"), (INTERACTIVE_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.warning.subtle-hover")],
    },
    CompoundRule {
        when: &[("type", "alert"), (INTERACTIVE_AXIS, "true"), ("state", "default")],
        apply: &[token(S::Root, P::HoverBackground, "color.bg.alert.subtle-hover")],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "x-small")],
        apply: &[token(S::Root, P::Width, "size.pill.xs")],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "small")],
        apply: &[token(S::Root, P::Width, "size.pill.sm")],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "medium")],
        apply: &[token(S::Root, P::Width, "size.pill.md")],
    },
    CompoundRule {
        when: &[(ICON_ONLY_AXIS, "true"), ("size", "large")],
        apply: &[token(S::Root, P::Width, "size.pill.lg")],
    },
];

pub static RECIPE: Recipe = Recipe {
    kind: ComponentKind::Pill,
    axes: AXES,
    compounds: COMPOUNDS,
    disabled: Some(("state", "disabled")),
    icon_only_axis: Some(ICON_ONLY_AXIS),
    icon_incompatible: &[("size", "x-small")],
    large_icon_when: &[],
};
