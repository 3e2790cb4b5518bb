use super::*;
use crate::contracts::{ProviderAware, WithId};
use crate::diagnostics::{AccessibilityIssue, ConfigurationIssue, Diagnostic, Diagnostics};
use crate::feedback::{ToastEntry, ToastManager};
use crate::icon::IconSize;
use crate::provider::DesignProvider;
use crate::recipes::{
    ButtonSize, ButtonType, CardVariant, ContainerType, PillSize, PillType, ToggleSize,
};
use crate::style::{Property, Slot, StyleValue};
use gpui::{AnyElement, IntoElement, ParentElement, div};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[test]
fn smoke_shells_render_into_any_element() {
    let _ = into_any(Button::new("Save"));
    let _ = into_any(Button::icon("plus").accessible_label("Add"));
    let _ = into_any(Pill::new("2024").left_icon("calendar").right_subtext("new"));
    let _ = into_any(Card::new().child(div()));
    let _ = into_any(Container::new().container_type(ContainerType::Info).child(div()));
    let _ = into_any(Toggle::new().label("Notifications"));
    let _ = into_any(Icon::named("info-circle"));

    let manager = ToastManager::default();
    manager.show(ToastEntry::new("Saved", "Your changes are live"));
    let _ = into_any(ToastViewport::new(manager));
}

#[test]
fn save_button_uses_primary_medium_styles() {
    let button = Button::new("Save").size(ButtonSize::Medium);
    let explicit = Button::new("Save")
        .button_type(ButtonType::Primary)
        .size(ButtonSize::Medium);
    let style = button.resolve().expect("valid selection");
    assert_eq!(Ok(style.clone()), explicit.resolve());
    assert_eq!(
        style.read(Slot::Root, Property::Background),
        Some(StyleValue::Token("color.bg.brand.strong"))
    );
    assert_eq!(
        style.read(Slot::Root, Property::Height),
        Some(StyleValue::Token("size.control.md"))
    );

    let visibility = button.visibility().expect("valid selection");
    assert!(visibility.label);
    assert!(!visibility.left_icon && !visibility.right_icon);
    assert_eq!(visibility.icon_size, None);
}

#[test]
fn icon_only_button_needs_an_accessible_name() {
    let (diagnostics, sink) = Diagnostics::recording();
    let visibility = Button::icon("plus")
        .right_icon("chevron-down")
        .diagnostics(diagnostics.clone())
        .visibility()
        .expect("valid selection");
    assert!(!visibility.label);
    assert!(visibility.left_icon);
    assert!(!visibility.right_icon);
    assert_eq!(
        sink.take(),
        vec![Diagnostic::Accessibility {
            component: "button",
            issue: AccessibilityIssue::IconOnlyWithoutName,
        }]
    );

    let named = Button::icon("plus")
        .accessible_label("Add item")
        .diagnostics(diagnostics)
        .visibility()
        .expect("valid selection");
    assert_eq!(named.accessible_name.as_deref(), Some("Add item"));
    assert!(sink.is_empty());
}

#[test]
fn large_buttons_request_large_icons() {
    let visibility = Button::new("Next")
        .size(ButtonSize::Large)
        .right_icon("arrow-right")
        .diagnostics(Diagnostics::silent())
        .visibility()
        .expect("valid selection");
    assert_eq!(visibility.icon_size, Some(IconSize::Large));
}

#[test]
fn x_small_pill_hides_its_icon_but_keeps_the_label() {
    let (diagnostics, sink) = Diagnostics::recording();
    let pill = Pill::new("2024")
        .size(PillSize::XSmall)
        .left_icon("calendar")
        .diagnostics(diagnostics);

    let visibility = pill.visibility().expect("valid selection");
    assert!(visibility.label);
    assert!(!visibility.left_icon);
    assert!(!pill.resolve().expect("valid selection").has_slot(Slot::Icon));
    assert_eq!(
        sink.take(),
        vec![Diagnostic::Configuration {
            component: "pill",
            issue: ConfigurationIssue::IconsUnsupportedAtSize { size: "x-small" },
        }]
    );
}

#[test]
fn pill_show_flags_and_icon_only_suppress_subtexts() {
    let pill = Pill::new("Beta")
        .left_subtext("v2")
        .right_subtext("new")
        .show_left_subtext(false)
        .accessible_label("Beta")
        .description_id("beta-notes")
        .diagnostics(Diagnostics::silent());
    let visibility = pill.visibility().expect("valid selection");
    assert!(!visibility.left_subtext);
    assert!(visibility.right_subtext);

    let icon_only = Pill::new("Beta")
        .icon_only(true)
        .left_icon("flask")
        .right_icon("x")
        .right_subtext("new")
        .diagnostics(Diagnostics::silent())
        .visibility()
        .expect("valid selection");
    assert!(!icon_only.label);
    assert!(icon_only.left_icon);
    assert!(!icon_only.right_icon);
    assert!(!icon_only.right_subtext);
    assert_eq!(icon_only.accessible_name.as_deref(), Some("Beta"));
}

#[test]
fn deprecated_pill_types_render_as_their_replacement() {
    let (diagnostics, sink) = Diagnostics::recording();
    let legacy = Pill::new("Late")
        .pill_type(PillType::HighAlert)
        .diagnostics(diagnostics.clone());
    let current = Pill::new("Late").pill_type(PillType::Alert);
    assert_eq!(legacy.resolve(), current.resolve());

    assert!(legacy.report_deprecated_type());
    assert!(!current.diagnostics(diagnostics).report_deprecated_type());
    assert_eq!(
        sink.take(),
        vec![Diagnostic::Configuration {
            component: "pill",
            issue: ConfigurationIssue::DeprecatedAlias {
                axis: "type",
                alias: "high-alert",
                replacement: "alert",
            },
        }]
    );
}

#[test]
fn disabled_interactive_card_is_inert_and_dimmed() {
    let card = Card::new().variant(CardVariant::Interactive).disabled(true);
    let press = card.press();
    assert!(!press.focusable());
    assert!(!press.tracks_hover());

    let style = card.resolve().expect("valid selection");
    assert_eq!(
        style.read(Slot::Root, Property::Opacity),
        Some(StyleValue::Literal("0.4"))
    );
    assert_eq!(style.hovered(), style);
}

#[test]
fn only_interactive_cards_and_containers_take_focus() {
    assert!(Card::new().variant(CardVariant::Interactive).press().focusable());
    assert!(!Card::new().press().focusable());
    assert!(!Card::new().variant(CardVariant::Outlined).press().focusable());
    assert!(Container::new().interactive(true).press().focusable());
    assert!(!Container::new().press().focusable());
    assert!(!Container::new().interactive(true).disabled(true).press().focusable());
}

#[test]
fn interactive_container_gains_a_hover_background() {
    let plain = Container::new().container_type(ContainerType::Positive);
    let interactive = Container::new()
        .container_type(ContainerType::Positive)
        .interactive(true);
    let plain_style = plain.resolve().expect("valid selection");
    let interactive_style = interactive.resolve().expect("valid selection");
    assert_eq!(
        plain_style.read(Slot::Root, Property::Background),
        interactive_style.read(Slot::Root, Property::Background)
    );
    assert!(
        plain_style
            .read(Slot::Root, Property::HoverBackground)
            .is_none_or(StyleValue::is_none)
    );
    assert!(
        interactive_style
            .read(Slot::Root, Property::HoverBackground)
            .is_some_and(|value| !value.is_none())
    );
}

#[test]
fn toggle_size_changes_track_dimensions() {
    let small = Toggle::new().with_id("smoke-toggle-small").size(ToggleSize::Small);
    let medium = Toggle::new().with_id("smoke-toggle-medium");
    assert_eq!(
        small.resolve().expect("valid").read(Slot::Track, Property::Width),
        Some(StyleValue::Token("size.toggle.track.width.sm"))
    );
    assert_eq!(
        medium.resolve().expect("valid").read(Slot::Track, Property::Width),
        Some(StyleValue::Token("size.toggle.track.width.md"))
    );
}

#[test]
fn provider_settings_flow_into_shells() {
    let (diagnostics, sink) = Diagnostics::recording();
    let provider = DesignProvider::new().set_diagnostics(diagnostics);
    let _ = Button::icon("plus")
        .provider(&provider)
        .visibility()
        .expect("valid selection");
    assert_eq!(sink.len(), 1);

    let shown = provider.toast().show(ToastEntry::new("Queued", "Export started"));
    let viewport = ToastViewport::from_provider(&provider);
    assert!(provider.toast().is_visible(shown));
    let _ = into_any(viewport);
}
