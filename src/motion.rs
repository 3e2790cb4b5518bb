use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MotionLevel {
    #[default]
    Full,
    Reduced,
    None,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MotionConfig {
    pub level: MotionLevel,
    pub toggle_duration_ms: u16,
    pub easing: Easing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            toggle_duration_ms: 150,
            easing: Easing::EaseOut,
        }
    }
}

impl MotionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn toggle_duration_ms(mut self, duration_ms: u16) -> Self {
        self.toggle_duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Interpolates the toggle thumb between its off (`0.0`) and on (`1.0`) positions.
///
/// Purely cosmetic: the toggle's boolean is settled before the animation starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThumbAnimation {
    duration: Duration,
    easing: Easing,
}

impl ThumbAnimation {
    /// Returns `None` when motion is switched off.
    pub fn from_config(config: MotionConfig) -> Option<Self> {
        let duration_ms = match config.level {
            MotionLevel::Full => config.toggle_duration_ms,
            MotionLevel::Reduced => config.toggle_duration_ms / 2,
            MotionLevel::None => return None,
        };
        (duration_ms > 0).then(|| Self {
            duration: Duration::from_millis(u64::from(duration_ms)),
            easing: config.easing,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn rest_position(checked: bool) -> f32 {
        if checked { 1.0 } else { 0.0 }
    }

    /// Thumb position `delta` of the way through a transition that ends at `checked`.
    pub fn position(&self, checked: bool, delta: f32) -> f32 {
        let progress = self.easing.apply(delta);
        if checked { progress } else { 1.0 - progress }
    }
}
