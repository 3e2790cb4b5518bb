use std::rc::Rc;

use gpui::{ClickEvent, InteractiveElement, StatefulInteractiveElement, Window};

use crate::id::ComponentId;
use crate::interaction::PressBehavior;

use super::control;

pub type ActivateHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

#[derive(Clone, Default)]
pub struct PressAdapter {
    pub id: ComponentId,
    pub behavior: PressBehavior,
    pub on_activate: Option<ActivateHandler>,
}

impl PressAdapter {
    pub fn new(id: ComponentId, behavior: PressBehavior) -> Self {
        Self {
            id,
            behavior,
            on_activate: None,
        }
    }

    pub fn on_activate(mut self, value: Option<ActivateHandler>) -> Self {
        self.on_activate = value;
        self
    }
}

/// Wires hover tracking, focus and click / Enter / Space activation.
///
/// Elements whose behavior is not focusable get none of it: they stay out of
/// the tab order and activation is a no-op.
pub fn bind_press_adapter<T>(mut node: T, adapter: PressAdapter) -> T
where
    T: InteractiveElement + StatefulInteractiveElement,
{
    if !adapter.behavior.focusable() {
        return node;
    }

    let id_for_hover = adapter.id.clone();
    node = node.on_hover(move |hovered, window, _cx| {
        if control::set_hovered_state(id_for_hover.as_str(), *hovered) {
            window.refresh();
        }
    });

    let Some(handler) = adapter.on_activate else {
        return node;
    };

    node = node.focusable();

    let click_handler = handler.clone();
    node = node.on_click(move |event, window, cx| {
        (click_handler)(event, window, cx);
        window.refresh();
    });

    node = node.on_key_down(move |event, window, cx| {
        if !control::is_activation_keystroke(event) {
            return;
        }
        (handler)(&ClickEvent::default(), window, cx);
        window.refresh();
        cx.stop_propagation();
    });

    node
}
