use std::sync::Arc;

use gpui::{Component, Hsla, IntoElement, ParentElement, RenderOnce, Styled, div, px, svg};

use crate::icon::{IconProvider, IconRequest, IconSize, IconSource, SvgIcons};

/// Renders one icon through the active [`IconProvider`].
pub struct Icon {
    source: IconSource,
    size: IconSize,
    size_px: Option<f32>,
    color: Option<Hsla>,
    provider: Arc<dyn IconProvider>,
}

impl Icon {
    pub fn new(source: IconSource) -> Self {
        Self {
            source,
            size: IconSize::Small,
            size_px: None,
            color: None,
            provider: Arc::new(SvgIcons::default()),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(IconSource::named(name))
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Overrides the pixel size the size category would otherwise map to.
    pub fn size_px(mut self, value: Option<f32>) -> Self {
        self.size_px = value;
        self
    }

    pub fn color(mut self, value: Hsla) -> Self {
        self.color = Some(value);
        self
    }

    pub fn provider(mut self, provider: Arc<dyn IconProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn request(&self) -> IconRequest {
        IconRequest::new(self.source.clone(), self.size)
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let size = self.size_px.unwrap_or_else(|| self.size.px());
        if let Some(path) = self.provider.resolve(&self.request()) {
            let mut icon = svg().path(path).flex_none().w(px(size)).h(px(size));
            if let Some(color) = self.color {
                icon = icon.text_color(color);
            }
            return icon.into_any_element();
        }

        log::debug!("no icon for {:?}", self.source);
        div()
            .flex_none()
            .w(px(size))
            .h(px(size))
            .child("")
            .into_any_element()
    }
}

impl IntoElement for Icon {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}
