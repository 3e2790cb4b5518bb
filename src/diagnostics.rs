use std::fmt;
use std::sync::{Arc, Mutex};

pub const LOG_TARGET: &str = "harbor_ui::diagnostics";

/// An optional sub-element of a component whose visibility is derived.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SubElement {
    Label,
    LeftIcon,
    RightIcon,
    LeftSubtext,
    RightSubtext,
}

impl SubElement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::LeftIcon => "left icon",
            Self::RightIcon => "right icon",
            Self::LeftSubtext => "left subtext",
            Self::RightSubtext => "right subtext",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessibilityIssue {
    IconOnlyWithoutName,
    MissingSlotContent(SubElement),
    HiddenTextWithoutFallback(SubElement),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigurationIssue {
    NoDismissPath {
        toast_id: u64,
    },
    IconsUnsupportedAtSize {
        size: &'static str,
    },
    DeprecatedAlias {
        axis: &'static str,
        alias: &'static str,
        replacement: &'static str,
    },
}

/// A non-fatal developer-facing report. Diagnostics never change what renders.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Diagnostic {
    Accessibility {
        component: &'static str,
        issue: AccessibilityIssue,
    },
    Configuration {
        component: &'static str,
        issue: ConfigurationIssue,
    },
}

impl Diagnostic {
    pub fn component(&self) -> &'static str {
        match self {
            Self::Accessibility { component, .. } | Self::Configuration { component, .. } => {
                *component
            }
        }
    }

    pub fn is_accessibility(&self) -> bool {
        matches!(self, Self::Accessibility { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accessibility { component, issue } => {
                write!(f, "{component}: accessibility: ")?;
                match issue {
                    AccessibilityIssue::IconOnlyWithoutName => {
                        f.write_str("icon-only element has no accessible name")
                    }
                    AccessibilityIssue::MissingSlotContent(slot) => write!(
                        f,
                        "{} was requested to render but no content was supplied",
                        slot.as_str()
                    ),
                    AccessibilityIssue::HiddenTextWithoutFallback(slot) => write!(
                        f,
                        "{} is hidden and no accessible description was supplied",
                        slot.as_str()
                    ),
                }
            }
            Self::Configuration { component, issue } => {
                write!(f, "{component}: configuration: ")?;
                match issue {
                    ConfigurationIssue::NoDismissPath { toast_id } => write!(
                        f,
                        "toast {toast_id} has auto-dismiss and the close button both disabled"
                    ),
                    ConfigurationIssue::IconsUnsupportedAtSize { size } => {
                        write!(f, "icons are not shown at size `{size}`")
                    }
                    ConfigurationIssue::DeprecatedAlias {
                        axis,
                        alias,
                        replacement,
                    } => write!(
                        f,
                        "{axis} `{alias}` is deprecated, use `{replacement}` instead"
                    ),
                }
            }
        }
    }
}

pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Routes diagnostics to the `log` facade as warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        log::warn!(target: LOG_TARGET, "{diagnostic}");
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

/// Keeps every reported diagnostic in memory, mostly for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Diagnostic> {
        let mut recorded = self
            .recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::take(&mut *recorded)
    }

    pub fn len(&self) -> usize {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(diagnostic);
    }
}

/// Cheaply clonable handle to the active diagnostic sink.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    pub fn log() -> Self {
        Self::new(Arc::new(LogSink))
    }

    pub fn silent() -> Self {
        Self::new(Arc::new(SilentSink))
    }

    /// A handle plus the recorder behind it.
    pub fn recording() -> (Self, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        (Self::new(sink.clone()), sink)
    }

    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }

    pub fn accessibility(&self, component: &'static str, issue: AccessibilityIssue) {
        self.report(Diagnostic::Accessibility { component, issue });
    }

    pub fn configuration(&self, component: &'static str, issue: ConfigurationIssue) {
        self.report(Diagnostic::Configuration { component, issue });
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::log()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}
