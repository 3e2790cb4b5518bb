use std::sync::Arc;

use crate::diagnostics::Diagnostics;
use crate::feedback::{ToastDefaults, ToastManager};
use crate::icon::{IconProvider, SvgIcons};
use crate::motion::MotionConfig;
use crate::tokens::TokenTable;

/// Composition-root configuration shared by the component shells.
///
/// Owned by the host application and handed to shells and the toast viewport
/// explicitly; nothing here is installed globally.
#[derive(Clone)]
pub struct DesignProvider {
    motion: MotionConfig,
    toast_defaults: ToastDefaults,
    diagnostics: Diagnostics,
    icons: Arc<dyn IconProvider>,
    toast_manager: ToastManager,
}

impl Default for DesignProvider {
    fn default() -> Self {
        let diagnostics = Diagnostics::default();
        let toast_defaults = ToastDefaults::default();
        Self {
            motion: MotionConfig::default(),
            toast_defaults,
            toast_manager: ToastManager::new(toast_defaults, diagnostics.clone()),
            diagnostics,
            icons: Arc::new(SvgIcons::default()),
        }
    }
}

impl std::fmt::Debug for DesignProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignProvider")
            .field("motion", &self.motion)
            .field("toast_defaults", &self.toast_defaults)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl DesignProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_motion(mut self, motion: MotionConfig) -> Self {
        self.motion = motion;
        self
    }

    /// Replaces the toast defaults. Toasts shown on the previous manager are dropped.
    pub fn set_toast_defaults(mut self, defaults: ToastDefaults) -> Self {
        self.toast_defaults = defaults;
        self.toast_manager = ToastManager::new(defaults, self.diagnostics.clone());
        self
    }

    pub fn set_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.toast_manager = ToastManager::new(self.toast_defaults, diagnostics.clone());
        self.diagnostics = diagnostics;
        self
    }

    pub fn set_icons(mut self, icons: impl IconProvider + 'static) -> Self {
        self.icons = Arc::new(icons);
        self
    }

    pub fn motion(&self) -> MotionConfig {
        self.motion
    }

    pub fn toast_defaults(&self) -> ToastDefaults {
        self.toast_defaults
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics.clone()
    }

    pub fn icons(&self) -> Arc<dyn IconProvider> {
        self.icons.clone()
    }

    pub fn toast(&self) -> ToastManager {
        self.toast_manager.clone()
    }

    pub fn tokens(&self) -> &'static TokenTable {
        TokenTable::global()
    }
}
