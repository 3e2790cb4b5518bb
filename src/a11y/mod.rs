//! Decides which optional sub-elements render and what accessible name a
//! component exposes. Problems are reported as diagnostics and never change
//! the derived [`Visibility`].

use crate::diagnostics::{AccessibilityIssue, ConfigurationIssue, Diagnostics, SubElement};
use crate::icon::IconSize;
use crate::variant::{Recipe, ResolvedSelection};

/// Content presence and caller show-flag for one optional sub-element.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlotInput {
    pub supplied: bool,
    pub show: Option<bool>,
}

impl SlotInput {
    pub fn new(supplied: bool, show: Option<bool>) -> Self {
        Self { supplied, show }
    }

    fn requested_without_content(self) -> bool {
        self.show == Some(true) && !self.supplied
    }
}

#[derive(Clone, Debug, Default)]
pub struct VisibilityInput<'a> {
    pub component: &'static str,
    pub label: Option<&'a str>,
    pub left_icon: SlotInput,
    pub right_icon: SlotInput,
    pub left_subtext: SlotInput,
    pub right_subtext: SlotInput,
    pub icon_only: bool,
    pub icons_supported: bool,
    pub large_icons: bool,
    /// Size axis value, used only to name the size in diagnostics.
    pub size: &'static str,
    pub accessible_label: Option<&'a str>,
    pub accessible_description: Option<&'a str>,
}

impl<'a> VisibilityInput<'a> {
    /// Starts an input with the icon rules of `recipe` applied to `selection`.
    pub fn for_selection(recipe: &Recipe, selection: &ResolvedSelection) -> Self {
        Self {
            component: recipe.kind.as_str(),
            icon_only: recipe.icon_only(selection),
            icons_supported: recipe.supports_icons(selection),
            large_icons: recipe.uses_large_icons(selection),
            size: selection.value("size").unwrap_or_default(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Visibility {
    pub label: bool,
    pub left_icon: bool,
    pub right_icon: bool,
    pub left_subtext: bool,
    pub right_subtext: bool,
    /// Size category to request icons at, when any icon is visible.
    pub icon_size: Option<IconSize>,
    pub accessible_name: Option<String>,
    pub accessible_description: Option<String>,
}

impl Visibility {
    pub fn is_visible(&self, element: SubElement) -> bool {
        match element {
            SubElement::Label => self.label,
            SubElement::LeftIcon => self.left_icon,
            SubElement::RightIcon => self.right_icon,
            SubElement::LeftSubtext => self.left_subtext,
            SubElement::RightSubtext => self.right_subtext,
        }
    }
}

fn visible(slot: SlotInput, suppressed: bool) -> bool {
    slot.supplied && !suppressed && slot.show != Some(false)
}

pub fn derive(input: &VisibilityInput<'_>, diagnostics: &Diagnostics) -> Visibility {
    let label_text = input.label.filter(|label| !label.trim().is_empty());
    let icons_suppressed = !input.icons_supported;

    let left_icon = visible(input.left_icon, icons_suppressed);
    let right_icon = visible(input.right_icon, icons_suppressed || input.icon_only);
    let left_subtext = visible(input.left_subtext, input.icon_only);
    let right_subtext = visible(input.right_subtext, input.icon_only);

    let accessible_name = input
        .accessible_label
        .or(if input.icon_only { label_text } else { None })
        .map(str::to_string);

    let visibility = Visibility {
        label: label_text.is_some() && !input.icon_only,
        left_icon,
        right_icon,
        left_subtext,
        right_subtext,
        icon_size: (left_icon || right_icon).then_some(if input.large_icons {
            IconSize::Large
        } else {
            IconSize::Small
        }),
        accessible_name,
        accessible_description: input.accessible_description.map(str::to_string),
    };

    report(input, &visibility, diagnostics);
    visibility
}

fn report(input: &VisibilityInput<'_>, visibility: &Visibility, diagnostics: &Diagnostics) {
    let component = input.component;

    if input.icon_only && visibility.accessible_name.is_none() {
        diagnostics.accessibility(component, AccessibilityIssue::IconOnlyWithoutName);
    }

    let slots = [
        (SubElement::LeftIcon, input.left_icon),
        (SubElement::RightIcon, input.right_icon),
        (SubElement::LeftSubtext, input.left_subtext),
        (SubElement::RightSubtext, input.right_subtext),
    ];
    for (element, slot) in slots {
        if slot.requested_without_content() {
            diagnostics.accessibility(component, AccessibilityIssue::MissingSlotContent(element));
        }
    }

    if input.accessible_description.is_none() {
        for (element, slot) in [
            (SubElement::LeftSubtext, input.left_subtext),
            (SubElement::RightSubtext, input.right_subtext),
        ] {
            if slot.supplied && !visibility.is_visible(element) {
                diagnostics.accessibility(
                    component,
                    AccessibilityIssue::HiddenTextWithoutFallback(element),
                );
            }
        }
    }

    if !input.icons_supported && (input.left_icon.supplied || input.right_icon.supplied) {
        diagnostics.configuration(
            component,
            ConfigurationIssue::IconsUnsupportedAtSize { size: input.size },
        );
    }
}
