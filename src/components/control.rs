//! Per-element state shared across renders, keyed by element id.
//!
//! Entries live until [`release_state`] is called for their id.

use std::{
    collections::HashMap,
    sync::{LazyLock, Mutex, MutexGuard},
};

use gpui::KeyDownEvent;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::id::ComponentId;
use crate::interaction;

static BOOL_STATE: LazyLock<Mutex<HashMap<String, bool>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

static REPORTED: LazyLock<Mutex<HashMap<String, Vec<Diagnostic>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

pub const HOVERED_SLOT: &str = "hovered";
pub const CHECKED_SLOT: &str = "checked";

fn key(id: &str, slot: &str) -> String {
    format!("{id}::{slot}")
}

fn lock() -> MutexGuard<'static, HashMap<String, bool>> {
    BOOL_STATE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn lock_reported() -> MutexGuard<'static, HashMap<String, Vec<Diagnostic>>> {
    REPORTED
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Controlled value when given, otherwise the value stored for `id`/`slot`.
pub fn bool_state(id: &str, slot: &str, controlled: Option<bool>, default: bool) -> bool {
    if let Some(value) = controlled {
        return value;
    }
    *lock().entry(key(id, slot)).or_insert(default)
}

pub fn set_bool_state(id: &str, slot: &str, value: bool) {
    lock().insert(key(id, slot), value);
}

/// Stores `value` and returns what was stored before, if anything.
pub fn replace_bool_state(id: &str, slot: &str, value: bool) -> Option<bool> {
    lock().insert(key(id, slot), value)
}

pub fn hovered_state(id: &str) -> bool {
    bool_state(id, HOVERED_SLOT, None, false)
}

/// Returns whether the stored value changed.
pub fn set_hovered_state(id: &str, value: bool) -> bool {
    lock().insert(key(id, HOVERED_SLOT), value) != Some(value)
}

/// Forwards `reports` to `diagnostics` unless `id` last reported exactly the same set.
///
/// Returns whether the set differed from the previous one. An empty set is
/// remembered too, so a problem that goes away and comes back is reported again.
pub fn report_changed(id: &str, diagnostics: &Diagnostics, reports: Vec<Diagnostic>) -> bool {
    {
        let mut reported = lock_reported();
        if reported.get(id) == Some(&reports) {
            return false;
        }
        reported.insert(id.to_string(), reports.clone());
    }
    for diagnostic in reports {
        diagnostics.report(diagnostic);
    }
    true
}

pub fn clear_state(id: &str) {
    let prefix = format!("{id}::");
    lock().retain(|composed, _| !composed.starts_with(&prefix));
    lock_reported().remove(id);
}

/// Drops the hover, checked and reported-diagnostics state kept for `id`.
///
/// Call it when a keyed element is removed for good; otherwise its entries
/// stay for the life of the process.
pub fn release_state(id: &ComponentId) {
    clear_state(id.as_str());
}

pub fn is_activation_keystroke(event: &KeyDownEvent) -> bool {
    interaction::is_activation_key(event.keystroke.key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::AccessibilityIssue;

    #[test]
    fn controlled_value_bypasses_stored_state() {
        set_bool_state("control-test-a", CHECKED_SLOT, true);
        assert!(!bool_state("control-test-a", CHECKED_SLOT, Some(false), true));
        assert!(bool_state("control-test-a", CHECKED_SLOT, None, false));
    }

    #[test]
    fn hover_changes_are_reported_once() {
        assert!(!hovered_state("control-test-b"));
        assert!(set_hovered_state("control-test-b", true));
        assert!(!set_hovered_state("control-test-b", true));
        assert!(hovered_state("control-test-b"));
        clear_state("control-test-b");
        assert!(!hovered_state("control-test-b"));
    }

    #[test]
    fn reports_repeat_only_when_their_content_changes() {
        let id = "control-test-c";
        let (diagnostics, sink) = Diagnostics::recording();
        let unnamed = || {
            vec![Diagnostic::Accessibility {
                component: "button",
                issue: AccessibilityIssue::IconOnlyWithoutName,
            }]
        };

        assert!(report_changed(id, &diagnostics, unnamed()));
        assert!(!report_changed(id, &diagnostics, unnamed()));
        assert_eq!(sink.take(), unnamed());

        assert!(report_changed(id, &diagnostics, Vec::new()));
        assert!(sink.is_empty());
        assert!(report_changed(id, &diagnostics, unnamed()));
        assert_eq!(sink.take(), unnamed());
        clear_state(id);
    }

    #[test]
    fn released_ids_start_from_scratch() {
        let id = ComponentId::from("control-test-d");
        let (diagnostics, sink) = Diagnostics::recording();
        let reports = vec![Diagnostic::Accessibility {
            component: "pill",
            issue: AccessibilityIssue::IconOnlyWithoutName,
        }];

        assert!(set_hovered_state(id.as_str(), true));
        assert_eq!(replace_bool_state(id.as_str(), CHECKED_SLOT, true), None);
        assert!(report_changed(id.as_str(), &diagnostics, reports.clone()));

        release_state(&id);
        assert!(!hovered_state(id.as_str()));
        assert_eq!(replace_bool_state(id.as_str(), CHECKED_SLOT, false), None);
        assert!(report_changed(id.as_str(), &diagnostics, reports.clone()));
        assert_eq!(sink.take(), [reports.clone(), reports].concat());
        release_state(&id);
    }
}
