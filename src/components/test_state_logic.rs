use std::cell::{Cell, RefCell};
use std::time::Duration;

use futures::executor::block_on;

use super::control::{self, CHECKED_SLOT};
use super::{Button, Card, Pill, Toggle, ToggleState};
use crate::contracts::{MotionAware, WithId};
use crate::diagnostics::{AccessibilityIssue, ConfigurationIssue, Diagnostic, Diagnostics};
use crate::feedback::{DismissReason, ToastDefaults, ToastEntry, ToastManager};
use crate::interaction::ActivationInput;
use crate::motion::{MotionConfig, MotionLevel};
use crate::recipes::{CardVariant, PillType};
use crate::style::{Property, Slot, StyleValue};

struct ScopedState<'a>(&'a str);

impl Drop for ScopedState<'_> {
    fn drop(&mut self) {
        control::clear_state(self.0);
    }
}

#[test]
fn toggle_flips_once_then_ignores_activation_while_disabled() {
    let mut state = ToggleState::new(false);
    let changes = RefCell::new(Vec::new());

    assert!(state.activate(false, |next| changes.borrow_mut().push(next)));
    assert!(state.is_on());

    assert!(!state.activate(true, |next| changes.borrow_mut().push(next)));
    assert!(state.is_on());
    assert_eq!(changes.into_inner(), vec![true]);
}

#[test]
fn uncontrolled_toggle_reads_its_stored_value() {
    let id = "state-toggle-uncontrolled";
    let _scope = ScopedState(id);

    let toggle = Toggle::new().with_id(id).default_checked(true);
    assert!(toggle.is_checked());

    control::set_bool_state(id, CHECKED_SLOT, false);
    let toggle = Toggle::new().with_id(id).default_checked(true);
    assert!(!toggle.is_checked());
    assert_eq!(
        toggle.resolve().expect("valid").read(Slot::Track, Property::Background),
        Some(StyleValue::Token("color.toggle.track.off"))
    );
}

#[test]
fn controlled_toggle_ignores_stored_value() {
    let id = "state-toggle-controlled";
    let _scope = ScopedState(id);

    control::set_bool_state(id, CHECKED_SLOT, false);
    let toggle = Toggle::new().with_id(id).checked(true);
    assert!(toggle.is_checked());
    assert_eq!(
        toggle.resolve().expect("valid").read(Slot::Track, Property::Background),
        Some(StyleValue::Token("color.toggle.track.on"))
    );
}

#[test]
fn disabled_checked_toggle_uses_muted_track() {
    let toggle = Toggle::new()
        .with_id("state-toggle-disabled")
        .checked(true)
        .disabled(true);
    let style = toggle.resolve().expect("valid");
    assert_eq!(
        style.read(Slot::Track, Property::Background),
        Some(StyleValue::Token("color.bg.brand.subtle-hover"))
    );
    assert!(!toggle.press().focusable());
}

#[test]
fn toggle_animation_follows_motion_level() {
    let toggle = Toggle::new().with_id("state-toggle-motion");
    assert!(toggle.thumb_animation().is_some());

    let still = Toggle::new()
        .with_id("state-toggle-still")
        .motion(MotionConfig::new().level(MotionLevel::None));
    assert!(still.thumb_animation().is_none());
}

#[test]
fn button_activation_runs_once_per_click() {
    let clicks = Cell::new(0);
    let press = Button::new("Save").press();
    assert!(press.activate(&ActivationInput::Click, || clicks.set(clicks.get() + 1)));
    assert!(press.activate(&ActivationInput::key("enter"), || clicks.set(clicks.get() + 1)));
    assert!(!press.activate(&ActivationInput::key("tab"), || clicks.set(clicks.get() + 1)));
    assert_eq!(clicks.get(), 2);

    let disabled = Button::new("Save").disabled(true).press();
    assert!(!disabled.activate(&ActivationInput::Click, || clicks.set(clicks.get() + 1)));
    assert_eq!(clicks.get(), 2);
}

#[test]
fn disabled_interactive_card_never_activates() {
    let calls = Cell::new(0);
    let press = Card::new()
        .variant(CardVariant::Interactive)
        .disabled(true)
        .press();
    for input in [
        ActivationInput::Click,
        ActivationInput::key("enter"),
        ActivationInput::key("space"),
    ] {
        assert!(!press.activate(&input, || calls.set(calls.get() + 1)));
    }
    assert_eq!(calls.get(), 0);
}

#[test]
fn static_pill_ignores_activation_until_made_interactive() {
    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);
    assert!(!Pill::new("Draft").press().activate(&ActivationInput::Click, bump));
    assert!(
        Pill::new("Draft")
            .interactive(true)
            .press()
            .activate(&ActivationInput::Click, bump)
    );
    assert_eq!(calls.get(), 1);
}

#[test]
fn hover_state_is_tracked_per_element() {
    let first = "state-hover-first";
    let second = "state-hover-second";
    let _first_scope = ScopedState(first);
    let _second_scope = ScopedState(second);

    assert!(control::set_hovered_state(first, true));
    assert!(control::hovered_state(first));
    assert!(!control::hovered_state(second));
}

#[test]
fn rerendered_button_reports_again_only_when_its_findings_change() {
    let id = "state-button-reports";
    let _scope = ScopedState(id);
    let (diagnostics, sink) = Diagnostics::recording();
    let button = |label: Option<&'static str>| {
        let button = Button::icon("plus").with_id(id).diagnostics(diagnostics.clone());
        match label {
            Some(label) => button.accessible_label(label),
            None => button,
        }
    };

    button(Some("Add")).rendered_visibility().expect("valid selection");
    assert!(sink.is_empty());

    button(None).rendered_visibility().expect("valid selection");
    assert_eq!(
        sink.take(),
        vec![Diagnostic::Accessibility {
            component: "button",
            issue: AccessibilityIssue::IconOnlyWithoutName,
        }]
    );

    button(None).rendered_visibility().expect("valid selection");
    assert!(sink.is_empty());
}

#[test]
fn rerendered_pill_reports_a_new_deprecated_type() {
    let id = "state-pill-reports";
    let _scope = ScopedState(id);
    let (diagnostics, sink) = Diagnostics::recording();
    let pill = |pill_type: PillType| {
        Pill::new("Late")
            .with_id(id)
            .pill_type(pill_type)
            .diagnostics(diagnostics.clone())
    };

    pill(PillType::Alert).rendered_visibility().expect("valid selection");
    pill(PillType::Alert).rendered_visibility().expect("valid selection");
    assert!(sink.is_empty());

    pill(PillType::HighAlert).rendered_visibility().expect("valid selection");
    pill(PillType::HighAlert).rendered_visibility().expect("valid selection");
    assert_eq!(sink.len(), 1);
}

#[test]
fn toast_without_dismiss_path_warns_and_never_times_out() {
    let (diagnostics, sink) = Diagnostics::recording();
    let manager = ToastManager::new(ToastDefaults::default(), diagnostics);
    let id = manager.show(
        ToastEntry::new("Pinned", "Stays until removed")
            .auto_dismiss(false)
            .show_close(false),
    );

    assert!(manager.is_visible(id));
    assert!(manager.auto_dismiss_task(id).is_none());
    assert_eq!(
        sink.take(),
        vec![Diagnostic::Configuration {
            component: "toast",
            issue: ConfigurationIssue::NoDismissPath { toast_id: id.0 },
        }]
    );
}

#[test]
fn toast_closed_before_timer_notifies_once() {
    let notifications = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let recorded = notifications.clone();
    let manager = ToastManager::new(
        ToastDefaults::new().duration(Duration::from_millis(5)),
        Diagnostics::silent(),
    );
    let id = manager.show(ToastEntry::new("Uploaded", "report.pdf").on_dismiss(
        move |id, reason| {
            recorded
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push((id, reason));
        },
    ));

    let timer = manager.auto_dismiss_task(id).expect("timer issued");
    assert!(manager.dismiss(id, DismissReason::Closed));
    assert!(!block_on(timer));
    assert!(!manager.dismiss(id, DismissReason::Closed));

    let notifications = notifications
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    assert_eq!(notifications.as_slice(), &[(id, DismissReason::Closed)]);
}
