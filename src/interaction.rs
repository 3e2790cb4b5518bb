//! Framework-free activation model shared by every pressable shell.

pub const ACTIVATION_KEYS: [&str; 2] = ["enter", "space"];

pub fn is_activation_key(key: &str) -> bool {
    ACTIVATION_KEYS.contains(&key)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActivationInput {
    Click,
    Key(String),
}

impl ActivationInput {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    pub fn is_activation(&self) -> bool {
        match self {
            Self::Click => true,
            Self::Key(key) => is_activation_key(key),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PressBehavior {
    pub interactive: bool,
    pub disabled: bool,
}

impl PressBehavior {
    pub fn new(interactive: bool, disabled: bool) -> Self {
        Self {
            interactive,
            disabled,
        }
    }

    /// Disabled elements never join the tab order.
    pub fn focusable(self) -> bool {
        self.interactive && !self.disabled
    }

    pub fn tracks_hover(self) -> bool {
        self.focusable()
    }

    pub fn accepts(self, input: &ActivationInput) -> bool {
        self.focusable() && input.is_activation()
    }

    /// Runs `handler` when the input activates this element. Returns whether it ran.
    pub fn activate(self, input: &ActivationInput, handler: impl FnOnce()) -> bool {
        if !self.accepts(input) {
            return false;
        }
        handler();
        true
    }
}
