use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};
use futures_timer::Delay;
use gpui::SharedString;

use crate::diagnostics::{ConfigurationIssue, Diagnostics};
use crate::icon::IconSource;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5_000);
pub const DEFAULT_MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ToastKind {
    #[default]
    Neutral,
    Info,
    Positive,
    Warning,
    Alert,
}

impl ToastKind {
    pub const ALL: [Self; 5] = [
        Self::Neutral,
        Self::Info,
        Self::Positive,
        Self::Warning,
        Self::Alert,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Positive => "positive",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }

    pub const fn background_token(self) -> &'static str {
        match self {
            Self::Neutral => "color.bg.neutral.subtle",
            Self::Info => "color.bg.info.subtle",
            Self::Positive => "color.bg.positive.subtle",
            Self::Warning => "color.bg.warning.subtle",
            Self::Alert => "color.bg.alert.subtle",
        }
    }

    pub const fn foreground_token(self) -> &'static str {
        match self {
            Self::Neutral => "color.text.neutral.subtle",
            Self::Info => "color.text.info.subtle",
            Self::Positive => "color.text.positive.subtle",
            Self::Warning => "color.text.warning.subtle",
            Self::Alert => "color.text.alert.subtle",
        }
    }

    pub const fn border_token(self) -> &'static str {
        match self {
            Self::Neutral => "color.border.neutral",
            Self::Info => "color.border.info",
            Self::Positive => "color.border.positive",
            Self::Warning => "color.border.warning",
            Self::Alert => "color.border.alert",
        }
    }

    pub fn default_icon(self) -> IconSource {
        IconSource::named(match self {
            Self::Neutral => "bell",
            Self::Info => "info-circle",
            Self::Positive => "circle-check",
            Self::Warning => "alert-triangle",
            Self::Alert => "alert-circle",
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DismissReason {
    /// The close affordance was used.
    Closed,
    Timeout,
    Programmatic,
    /// Pushed out by newer toasts once the visible limit was reached.
    Evicted,
    Cleared,
}

pub type DismissHandler = Arc<dyn Fn(ToastId, DismissReason) + Send + Sync>;

#[derive(Clone)]
pub struct ToastEntry {
    pub id: Option<ToastId>,
    pub title: SharedString,
    pub message: SharedString,
    pub kind: ToastKind,
    pub icon: Option<IconSource>,
    pub auto_dismiss: bool,
    /// Falls back to the manager's default duration when unset.
    pub duration: Option<Duration>,
    pub show_close: bool,
    pub on_dismiss: Option<DismissHandler>,
}

impl ToastEntry {
    pub fn new(title: impl Into<SharedString>, message: impl Into<SharedString>) -> Self {
        Self {
            id: None,
            title: title.into(),
            message: message.into(),
            kind: ToastKind::Neutral,
            icon: None,
            auto_dismiss: true,
            duration: None,
            show_close: true,
            on_dismiss: None,
        }
    }

    pub fn kind(mut self, value: ToastKind) -> Self {
        self.kind = value;
        self
    }

    pub fn icon(mut self, value: impl Into<String>) -> Self {
        self.icon = Some(IconSource::named(value));
        self
    }

    pub fn icon_source(mut self, source: IconSource) -> Self {
        self.icon = Some(source);
        self
    }

    pub fn auto_dismiss(mut self, value: bool) -> Self {
        self.auto_dismiss = value;
        self
    }

    pub fn duration(mut self, value: Duration) -> Self {
        self.duration = Some(value);
        self
    }

    pub fn show_close(mut self, value: bool) -> Self {
        self.show_close = value;
        self
    }

    pub fn on_dismiss(
        mut self,
        handler: impl Fn(ToastId, DismissReason) + Send + Sync + 'static,
    ) -> Self {
        self.on_dismiss = Some(Arc::new(handler));
        self
    }

    pub fn resolved_icon(&self) -> IconSource {
        self.icon.clone().unwrap_or_else(|| self.kind.default_icon())
    }

    /// A toast with neither a timer nor a close button can only be dismissed in code.
    pub fn validate(&self) -> Option<ConfigurationIssue> {
        (!self.auto_dismiss && !self.show_close).then(|| ConfigurationIssue::NoDismissPath {
            toast_id: self.id.map(|id| id.0).unwrap_or_default(),
        })
    }
}

impl fmt::Debug for ToastEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastEntry")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("icon", &self.icon)
            .field("auto_dismiss", &self.auto_dismiss)
            .field("duration", &self.duration)
            .field("show_close", &self.show_close)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ToastDefaults {
    pub duration: Duration,
    pub max_visible: usize,
}

impl Default for ToastDefaults {
    fn default() -> Self {
        Self {
            duration: DEFAULT_TOAST_DURATION,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

impl ToastDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duration(mut self, value: Duration) -> Self {
        self.duration = value;
        self
    }

    pub fn max_visible(mut self, value: usize) -> Self {
        self.max_visible = value.max(1);
        self
    }
}

struct ToastSlot {
    entry: ToastEntry,
    timer: Option<AbortHandle>,
    timer_issued: bool,
}

impl ToastSlot {
    fn new(entry: ToastEntry) -> Self {
        Self {
            entry,
            timer: None,
            timer_issued: false,
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[derive(Default)]
struct ToastState {
    queue: VecDeque<ToastSlot>,
}

/// Registry of visible toasts, owned by the host's composition root.
///
/// Clones share the same registry. Dismissal removes the toast first and only
/// the caller that removed it notifies, so each toast reports dismissal once.
#[derive(Clone)]
pub struct ToastManager {
    next_id: Arc<AtomicU64>,
    state: Arc<Mutex<ToastState>>,
    defaults: ToastDefaults,
    diagnostics: Diagnostics,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(ToastDefaults::default(), Diagnostics::default())
    }
}

impl fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastManager")
            .field("defaults", &self.defaults)
            .field("visible", &self.len())
            .finish()
    }
}

impl ToastManager {
    pub fn new(defaults: ToastDefaults, diagnostics: Diagnostics) -> Self {
        Self {
            next_id: Arc::new(AtomicU64::new(0)),
            state: Arc::new(Mutex::new(ToastState::default())),
            defaults,
            diagnostics,
        }
    }

    pub fn defaults(&self) -> ToastDefaults {
        self.defaults
    }

    fn lock(&self) -> MutexGuard<'_, ToastState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn report_if_invalid(&self, entry: &ToastEntry) {
        if let Some(issue) = entry.validate() {
            self.diagnostics.configuration("toast", issue);
        }
    }

    pub fn show(&self, mut entry: ToastEntry) -> ToastId {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        entry.id = Some(id);
        self.report_if_invalid(&entry);
        log::debug!("showing {id} ({})", entry.kind.as_str());

        let evicted = {
            let mut state = self.lock();
            state.queue.push_back(ToastSlot::new(entry));
            let overflow = state.queue.len().saturating_sub(self.defaults.max_visible);
            state.queue.drain(..overflow).collect::<Vec<_>>()
        };
        for slot in evicted {
            Self::notify(slot, DismissReason::Evicted);
        }
        id
    }

    /// Replaces a visible toast's content. A pending timer is cancelled and a
    /// new one may be requested through [`ToastManager::auto_dismiss_task`].
    pub fn update(&self, id: ToastId, mut entry: ToastEntry) -> bool {
        entry.id = Some(id);
        let mut state = self.lock();
        let Some(slot) = state
            .queue
            .iter_mut()
            .find(|slot| slot.entry.id == Some(id))
        else {
            return false;
        };
        self.report_if_invalid(&entry);
        slot.cancel_timer();
        slot.timer_issued = false;
        slot.entry = entry;
        true
    }

    /// Removes a toast and fires its dismissal callback. Returns `false` when the
    /// toast was already gone, in which case nothing is notified.
    pub fn dismiss(&self, id: ToastId, reason: DismissReason) -> bool {
        let removed = {
            let mut state = self.lock();
            state
                .queue
                .iter()
                .position(|slot| slot.entry.id == Some(id))
                .and_then(|index| state.queue.remove(index))
        };
        match removed {
            Some(slot) => {
                Self::notify(slot, reason);
                true
            }
            None => false,
        }
    }

    pub fn dismiss_all(&self) {
        let drained = self.lock().queue.drain(..).collect::<Vec<_>>();
        for slot in drained {
            Self::notify(slot, DismissReason::Cleared);
        }
    }

    fn notify(mut slot: ToastSlot, reason: DismissReason) {
        slot.cancel_timer();
        let Some(id) = slot.entry.id else {
            return;
        };
        log::debug!("dismissed {id} ({reason:?})");
        if let Some(handler) = slot.entry.on_dismiss.as_ref() {
            handler(id, reason);
        }
    }

    pub fn list(&self) -> Vec<ToastEntry> {
        self.lock()
            .queue
            .iter()
            .map(|slot| slot.entry.clone())
            .collect()
    }

    pub fn is_visible(&self, id: ToastId) -> bool {
        self.lock()
            .queue
            .iter()
            .any(|slot| slot.entry.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The one-shot auto-dismiss timer for `id`.
    ///
    /// Handed out at most once per shown (or updated) toast, and never for toasts
    /// without auto-dismiss. The future resolves to `true` if the timer dismissed
    /// the toast, and resolves early to `false` once another path dismissed it.
    pub fn auto_dismiss_task(
        &self,
        id: ToastId,
    ) -> Option<impl Future<Output = bool> + Send + 'static> {
        let (handle, registration) = AbortHandle::new_pair();
        let duration = {
            let mut state = self.lock();
            let slot = state
                .queue
                .iter_mut()
                .find(|slot| slot.entry.id == Some(id))?;
            if !slot.entry.auto_dismiss || slot.timer_issued {
                return None;
            }
            slot.timer_issued = true;
            slot.timer = Some(handle);
            slot.entry.duration.unwrap_or(self.defaults.duration)
        };

        let manager = self.clone();
        let delay = Abortable::new(Delay::new(duration), registration);
        Some(async move {
            match delay.await {
                Ok(()) => manager.dismiss(id, DismissReason::Timeout),
                Err(_) => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::executor::block_on;

    use super::*;
    use crate::diagnostics::Diagnostic;

    fn recorder() -> (
        Arc<Mutex<Vec<(ToastId, DismissReason)>>>,
        impl Fn(ToastId, DismissReason) + Send + Sync + 'static,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |id, reason| {
            sink.lock().expect("calls lock").push((id, reason))
        })
    }

    fn quiet_manager() -> ToastManager {
        ToastManager::new(ToastDefaults::default(), Diagnostics::silent())
    }

    #[test]
    fn entries_default_to_timed_closable_toasts() {
        let entry = ToastEntry::new("Saved", "Your draft was saved");
        assert!(entry.auto_dismiss);
        assert!(entry.show_close);
        assert_eq!(entry.kind, ToastKind::Neutral);
        assert_eq!(entry.validate(), None);
        assert_eq!(entry.resolved_icon(), IconSource::named("bell"));
        assert_eq!(ToastDefaults::default().duration, Duration::from_millis(5_000));
    }

    #[test]
    fn toast_without_dismiss_path_is_reported_and_stays() {
        let (diagnostics, recorded) = Diagnostics::recording();
        let manager = ToastManager::new(ToastDefaults::default(), diagnostics);
        let id = manager.show(
            ToastEntry::new("Sync paused", "Reconnect to continue")
                .auto_dismiss(false)
                .show_close(false),
        );

        assert_eq!(
            recorded.take(),
            vec![Diagnostic::Configuration {
                component: "toast",
                issue: ConfigurationIssue::NoDismissPath { toast_id: id.0 },
            }]
        );
        assert!(manager.auto_dismiss_task(id).is_none());
        assert!(manager.is_visible(id));
        assert!(!manager.list()[0].show_close);

        assert!(manager.dismiss(id, DismissReason::Programmatic));
        assert!(manager.is_empty());
    }

    #[test]
    fn close_then_timer_notifies_once() {
        let manager = quiet_manager();
        let (calls, on_dismiss) = recorder();
        let id = manager.show(
            ToastEntry::new("Copied", "Link copied")
                .duration(Duration::from_secs(30))
                .on_dismiss(on_dismiss),
        );
        let timer = manager.auto_dismiss_task(id).expect("timer issued");

        assert!(manager.dismiss(id, DismissReason::Closed));
        assert!(!block_on(timer));
        assert!(!manager.dismiss(id, DismissReason::Closed));
        assert_eq!(
            *calls.lock().expect("calls lock"),
            vec![(id, DismissReason::Closed)]
        );
    }

    #[test]
    fn timer_dismisses_once_and_later_close_is_a_no_op() {
        let manager = quiet_manager();
        let (calls, on_dismiss) = recorder();
        let id = manager.show(
            ToastEntry::new("Uploaded", "3 files")
                .duration(Duration::from_millis(10))
                .on_dismiss(on_dismiss),
        );
        let timer = manager.auto_dismiss_task(id).expect("timer issued");
        assert!(manager.auto_dismiss_task(id).is_none());

        assert!(block_on(timer));
        assert!(!manager.is_visible(id));
        assert!(!manager.dismiss(id, DismissReason::Closed));
        assert_eq!(
            *calls.lock().expect("calls lock"),
            vec![(id, DismissReason::Timeout)]
        );
    }

    #[test]
    fn oldest_toasts_are_evicted_past_the_limit() {
        let manager = ToastManager::new(
            ToastDefaults::new().max_visible(2),
            Diagnostics::silent(),
        );
        let (calls, on_dismiss) = recorder();
        let first = manager.show(ToastEntry::new("a", "1").on_dismiss(on_dismiss));
        manager.show(ToastEntry::new("b", "2"));
        manager.show(ToastEntry::new("c", "3"));

        let titles = manager
            .list()
            .into_iter()
            .map(|entry| entry.title.to_string())
            .collect::<Vec<_>>();
        assert_eq!(titles, ["b", "c"]);
        assert!(!manager.is_visible(first));
        assert_eq!(
            *calls.lock().expect("calls lock"),
            vec![(first, DismissReason::Evicted)]
        );
    }

    #[test]
    fn update_replaces_content_and_rearms_timer() {
        let manager = quiet_manager();
        let id = manager.show(ToastEntry::new("Uploading", "0%"));
        let first_timer = manager.auto_dismiss_task(id).expect("timer issued");

        assert!(manager.update(
            id,
            ToastEntry::new("Uploading", "50%").kind(ToastKind::Info)
        ));
        assert!(!block_on(first_timer));
        assert!(manager.is_visible(id));
        assert!(manager.auto_dismiss_task(id).is_some());

        let current = &manager.list()[0];
        assert_eq!(current.id, Some(id));
        assert_eq!(current.message.to_string(), "50%");
        assert!(!manager.update(ToastId(999), ToastEntry::new("x", "y")));
    }

    #[test]
    fn dismiss_all_clears_and_notifies_each() {
        let manager = quiet_manager();
        let (calls, on_dismiss) = recorder();
        let shared: DismissHandler = Arc::new(on_dismiss);
        for title in ["a", "b"] {
            let mut entry = ToastEntry::new(title, "");
            entry.on_dismiss = Some(shared.clone());
            manager.show(entry);
        }

        manager.dismiss_all();
        assert!(manager.is_empty());
        let calls = calls.lock().expect("calls lock");
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, reason)| *reason == DismissReason::Cleared));
    }
}
