use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::tokens::TokenTable;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct IconName {
    value: String,
}

impl IconName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum IconSource {
    Named(IconName),
    /// An svg asset path handed to the renderer untouched.
    Asset(String),
}

impl IconSource {
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named(IconName::new(value))
    }

    pub fn asset(path: impl Into<String>) -> Self {
        Self::Asset(path.into())
    }
}

impl From<&str> for IconSource {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

/// The two icon size categories a component can ask for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum IconSize {
    #[default]
    Small,
    Large,
}

impl IconSize {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Small => "size.icon.sm",
            Self::Large => "size.icon.lg",
        }
    }

    pub fn px(self) -> f32 {
        TokenTable::global()
            .dimension(self.token())
            .map(|dimension| dimension.px())
            .unwrap_or(16.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IconRequest {
    pub source: IconSource,
    pub size: IconSize,
}

impl IconRequest {
    pub fn new(source: IconSource, size: IconSize) -> Self {
        Self { source, size }
    }
}

/// Turns an icon request into a renderable svg asset path.
pub trait IconProvider: Send + Sync {
    fn resolve(&self, request: &IconRequest) -> Option<String>;
}

/// Maps `pack:name` icon names onto `<root>/<pack>/<name>.svg` asset paths.
#[derive(Clone, Debug)]
pub struct SvgIcons {
    root: String,
    default_pack: String,
    aliases: BTreeMap<String, String>,
}

impl Default for SvgIcons {
    fn default() -> Self {
        Self {
            root: "icons".to_string(),
            default_pack: "harbor".to_string(),
            aliases: BTreeMap::new(),
        }
    }
}

impl SvgIcons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn default_pack(mut self, pack: impl Into<String>) -> Self {
        self.default_pack = pack.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>, name: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), name.into());
        self
    }

    pub fn resolve_named(&self, name: &IconName) -> Option<String> {
        let name = self
            .aliases
            .get(name.as_str())
            .map(String::as_str)
            .unwrap_or(name.as_str());
        let (pack, icon) = split_namespace(name, &self.default_pack);
        if !is_plain_segment(pack) || !is_plain_segment(icon) {
            return None;
        }
        Some(format!("{}/{pack}/{icon}.svg", self.root.trim_end_matches('/')))
    }
}

impl IconProvider for SvgIcons {
    fn resolve(&self, request: &IconRequest) -> Option<String> {
        match &request.source {
            IconSource::Named(name) => self.resolve_named(name),
            IconSource::Asset(path) => Some(path.clone()),
        }
    }
}

fn split_namespace<'a>(value: &'a str, default_pack: &'a str) -> (&'a str, &'a str) {
    if let Some((pack, icon)) = value.split_once(':') {
        if !pack.is_empty() && !icon.is_empty() {
            return (pack, icon);
        }
    }
    (default_pack, value)
}

fn is_plain_segment(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}
