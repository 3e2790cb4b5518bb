use std::collections::BTreeMap;
use std::fmt;

use crate::style::{Fragment, Slot, StyleDescriptor};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ComponentKind {
    Button,
    Pill,
    Card,
    Container,
    Toggle,
}

impl ComponentKind {
    pub const ALL: [Self; 5] = [
        Self::Button,
        Self::Pill,
        Self::Card,
        Self::Container,
        Self::Toggle,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Pill => "pill",
            Self::Card => "card",
            Self::Container => "container",
            Self::Toggle => "toggle",
        }
    }

    pub fn recipe(self) -> &'static Recipe {
        crate::recipes::recipe_for(self)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum VariantError {
    #[error("invalid value {value:?} for {component} axis `{axis}`")]
    InvalidVariantValue {
        component: ComponentKind,
        axis: String,
        value: String,
    },
    #[error("{component} has no variant axis `{axis}`")]
    UnknownAxis {
        component: ComponentKind,
        axis: String,
    },
    #[error("style references unknown token `{0}`")]
    UnknownToken(String),
}

/// `(axis, value)` pairs, all of which must hold for a rule to apply.
pub type Conjunction = &'static [(&'static str, &'static str)];

#[derive(Debug)]
pub struct AxisSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub values: &'static [(&'static str, Fragment)],
    /// Deprecated spellings and the value they stand for.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl AxisSpec {
    pub fn canonical(&self, value: &str) -> Option<&'static str> {
        if let Some((name, _)) = self.values.iter().find(|(name, _)| *name == value) {
            return Some(*name);
        }
        self.aliases
            .iter()
            .find(|(alias, _)| *alias == value)
            .map(|(_, canonical)| *canonical)
    }

    pub fn fragment(&self, value: &str) -> Option<Fragment> {
        self.values
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, fragment)| *fragment)
    }

    pub fn allowed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.iter().map(|(name, _)| *name)
    }
}

#[derive(Debug)]
pub struct CompoundRule {
    pub when: Conjunction,
    pub apply: Fragment,
}

/// Declarative variant table for one component kind.
#[derive(Debug)]
pub struct Recipe {
    pub kind: ComponentKind,
    pub axes: &'static [AxisSpec],
    pub compounds: &'static [CompoundRule],
    /// The state axis and its value that counts as disabled.
    pub disabled: Option<(&'static str, &'static str)>,
    pub icon_only_axis: Option<&'static str>,
    /// Selections under which icons cannot be shown at all.
    pub icon_incompatible: Conjunction,
    /// Selections under which icons are requested at the large size.
    pub large_icon_when: Conjunction,
}

impl Recipe {
    pub fn axis(&self, name: &str) -> Option<&AxisSpec> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Validates a selection and fills every omitted axis with its default.
    pub fn normalize(&self, selection: &PropSelection) -> Result<ResolvedSelection, VariantError> {
        for axis in selection.values.keys() {
            if self.axis(axis).is_none() {
                return Err(VariantError::UnknownAxis {
                    component: self.kind,
                    axis: axis.clone(),
                });
            }
        }

        let mut values = BTreeMap::new();
        for axis in self.axes {
            let value = match selection.values.get(axis.name) {
                Some(raw) => {
                    axis.canonical(raw)
                        .ok_or_else(|| VariantError::InvalidVariantValue {
                            component: self.kind,
                            axis: axis.name.to_string(),
                            value: raw.clone(),
                        })?
                }
                None => axis.default,
            };
            values.insert(axis.name, value);
        }

        let disabled_by_state = self
            .disabled
            .is_some_and(|(axis, value)| values.get(axis) == Some(&value));

        Ok(ResolvedSelection {
            values,
            disabled: selection.disabled || disabled_by_state,
        })
    }

    pub fn matches(selection: &ResolvedSelection, conjunction: Conjunction) -> bool {
        !conjunction.is_empty()
            && conjunction
                .iter()
                .all(|(axis, value)| selection.value(axis) == Some(*value))
    }

    pub fn supports_icons(&self, selection: &ResolvedSelection) -> bool {
        !Self::matches(selection, self.icon_incompatible)
    }

    pub fn uses_large_icons(&self, selection: &ResolvedSelection) -> bool {
        Self::matches(selection, self.large_icon_when)
    }

    pub fn icon_only(&self, selection: &ResolvedSelection) -> bool {
        self.icon_only_axis
            .is_some_and(|axis| selection.value(axis) == Some("true"))
    }

    /// Resolves a prop selection into a style descriptor.
    ///
    /// Layers, in order: default fragments, actual fragments, matching compound
    /// rules in declaration order, then the disabled fragment. Slot suppression for
    /// icon-only and icon-incompatible selections runs last.
    pub fn resolve(&self, selection: &PropSelection) -> Result<StyleDescriptor, VariantError> {
        let selection = self.normalize(selection)?;
        let mut descriptor = StyleDescriptor::new();

        for axis in self.axes {
            if let Some(fragment) = axis.fragment(axis.default) {
                descriptor.merge(fragment);
            }
        }

        for axis in self.axes {
            if let Some(fragment) = selection.value(axis.name).and_then(|v| axis.fragment(v)) {
                descriptor.merge(fragment);
            }
        }

        for rule in self.compounds {
            if Self::matches(&selection, rule.when) {
                descriptor.merge(rule.apply);
            }
        }

        if selection.disabled {
            if let Some((axis, value)) = self.disabled {
                if let Some(fragment) = self.axis(axis).and_then(|spec| spec.fragment(value)) {
                    descriptor.merge(fragment);
                }
            }
        }

        if self.icon_only(&selection) {
            descriptor.remove_slot(Slot::Label);
            descriptor.remove_slot(Slot::Subtext);
        }
        if !self.supports_icons(&selection) {
            descriptor.remove_slot(Slot::Icon);
        }

        Ok(descriptor)
    }
}

/// Caller-facing prop selection: axis name to raw value, plus the disabled flag.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PropSelection {
    values: BTreeMap<String, String>,
    disabled: bool,
}

impl PropSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(axis.into(), value.into());
        self
    }

    pub fn axis<A: AxisValue>(self, value: A) -> Self {
        self.set(A::AXIS, value.as_str())
    }

    pub fn flag(self, axis: &'static str, value: bool) -> Self {
        self.set(axis, if value { "true" } else { "false" })
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// A validated selection with every axis filled in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSelection {
    values: BTreeMap<&'static str, &'static str>,
    disabled: bool,
}

impl ResolvedSelection {
    pub fn value(&self, axis: &str) -> Option<&'static str> {
        self.values.get(axis).copied()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

pub fn resolve(
    kind: ComponentKind,
    selection: &PropSelection,
) -> Result<StyleDescriptor, VariantError> {
    kind.recipe().resolve(selection)
}

/// A typed value of one variant axis.
pub trait AxisValue: Copy + 'static {
    const AXIS: &'static str;
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;
}

/// Declares a typed axis enum whose first variant is the default.
#[macro_export]
macro_rules! axis_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $kind:ident . $axis:literal {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $crate::variant::AxisValue for $name {
            const AXIS: &'static str = $axis;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::variant::AxisValue>::ALL[0]
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::variant::VariantError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                <Self as $crate::variant::AxisValue>::ALL
                    .iter()
                    .copied()
                    .find(|candidate| $crate::variant::AxisValue::as_str(*candidate) == value)
                    .ok_or_else(|| $crate::variant::VariantError::InvalidVariantValue {
                        component: $crate::variant::ComponentKind::$kind,
                        axis: $axis.to_string(),
                        value: value.to_string(),
                    })
            }
        }
    };
}

#[cfg(test)]
mod tests;
