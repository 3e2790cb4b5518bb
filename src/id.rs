use std::fmt;

/// Element id of a component instance. Child elements derive theirs with [`ComponentId::slot`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn slot(&self, part: &str) -> String {
        format!("{}-{part}", self.0)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ComponentId> for gpui::ElementId {
    fn from(value: ComponentId) -> Self {
        gpui::ElementId::Name(value.0.into())
    }
}

/// Id derived from the caller's source location, stable across frames.
#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}
