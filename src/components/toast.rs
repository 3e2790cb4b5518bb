use std::sync::Arc;

use gpui::{
    AnyElement, ClickEvent, Component, FontWeight, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window, div, px,
};

use crate::feedback::{DismissReason, ToastEntry, ToastId, ToastManager};
use crate::icon::{IconProvider, IconSize, IconSource, SvgIcons};
use crate::id::ComponentId;
use crate::provider::DesignProvider;

use super::Icon;
use super::utils::{token_hsla, token_px};

const TOAST_WIDTH: f32 = 360.0;

/// Renders the toasts of a [`ToastManager`] and drives their auto-dismiss timers.
pub struct ToastViewport {
    id: ComponentId,
    manager: ToastManager,
    icons: Arc<dyn IconProvider>,
}

impl ToastViewport {
    #[track_caller]
    pub fn new(manager: ToastManager) -> Self {
        Self {
            id: ComponentId::auto("toast-viewport"),
            manager,
            icons: Arc::new(SvgIcons::default()),
        }
    }

    /// Uses the provider's registry and icon provider.
    #[track_caller]
    pub fn from_provider(provider: &DesignProvider) -> Self {
        Self::new(provider.toast()).icons(provider.icons())
    }

    pub fn icons(mut self, icons: Arc<dyn IconProvider>) -> Self {
        self.icons = icons;
        self
    }

    fn schedule_auto_dismiss(&self, id: ToastId, window: &Window, cx: &mut gpui::App) {
        let Some(task) = self.manager.auto_dismiss_task(id) else {
            return;
        };
        let window_handle = window.window_handle();
        cx.spawn(async move |cx| {
            if task.await {
                let _ = window_handle.update(cx, |_, window, _| window.refresh());
            }
        })
        .detach();
    }

    fn render_close(&self, id: ToastId, color: Option<gpui::Hsla>) -> AnyElement {
        let manager = self.manager.clone();
        let mut icon = Icon::named("x")
            .size(IconSize::Small)
            .provider(self.icons.clone());
        if let Some(color) = color {
            icon = icon.color(color);
        }
        div()
            .id(gpui::SharedString::from(self.id.slot(&format!("{id}-close"))))
            .flex_none()
            .flex()
            .items_center()
            .justify_center()
            .w(px(24.0))
            .h(px(24.0))
            .rounded(px(token_px("radius.pill").unwrap_or(999.0)))
            .cursor_pointer()
            .child(icon)
            .on_click(
                move |_: &ClickEvent, window: &mut Window, _cx: &mut gpui::App| {
                    if manager.dismiss(id, DismissReason::Closed) {
                        window.refresh();
                    }
                },
            )
            .into_any_element()
    }

    fn render_toast(&self, entry: ToastEntry, id: ToastId) -> AnyElement {
        let background = token_hsla(entry.kind.background_token());
        let foreground = token_hsla(entry.kind.foreground_token());
        let border = token_hsla(entry.kind.border_token());
        let source: IconSource = entry.resolved_icon();

        let mut icon = Icon::new(source)
            .size(IconSize::Small)
            .provider(self.icons.clone());
        if let Some(color) = foreground {
            icon = icon.color(color);
        }

        let mut card = div()
            .id(gpui::SharedString::from(self.id.slot(&id.to_string())))
            .w(px(TOAST_WIDTH))
            .max_w_full()
            .flex()
            .flex_row()
            .items_start()
            .gap(px(token_px("space.sm").unwrap_or(8.0)))
            .p(px(token_px("space.md").unwrap_or(12.0)))
            .rounded(px(token_px("radius.md").unwrap_or(6.0)))
            .border_1()
            .shadow_md();
        if let Some(color) = background {
            card = card.bg(color);
        }
        if let Some(color) = border {
            card = card.border_color(color);
        }
        if let Some(color) = foreground {
            card = card.text_color(color);
        }

        let mut text = div().flex_1().min_w_0().flex().flex_col().gap_1();
        if !entry.title.is_empty() {
            text = text.child(
                div()
                    .w_full()
                    .font_weight(FontWeight::SEMIBOLD)
                    .truncate()
                    .child(entry.title.clone()),
            );
        }
        if !entry.message.is_empty() {
            text = text.child(
                div()
                    .w_full()
                    .text_size(px(token_px("font.size.sm").unwrap_or(13.0)))
                    .whitespace_normal()
                    .child(entry.message.clone()),
            );
        }

        card = card.child(icon).child(text);
        if entry.show_close {
            card = card.child(self.render_close(id, foreground));
        }
        card.into_any_element()
    }
}

crate::impl_with_id!(ToastViewport);

impl RenderOnce for ToastViewport {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let mut stack = div()
            .id(self.id.clone())
            .absolute()
            .bottom(px(16.0))
            .right(px(16.0))
            .flex()
            .flex_col()
            .gap(px(token_px("space.sm").unwrap_or(8.0)));

        for entry in self.manager.list() {
            let Some(id) = entry.id else {
                continue;
            };
            self.schedule_auto_dismiss(id, window, cx);
            stack = stack.child(self.render_toast(entry, id));
        }

        stack
    }
}

impl IntoElement for ToastViewport {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}
