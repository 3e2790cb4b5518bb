use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, Component, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Styled, Window, div,
};

use crate::id::ComponentId;
use crate::interaction::PressBehavior;
use crate::recipes::container::INTERACTIVE_AXIS;
use crate::recipes::{ContainerPadding, ContainerState, ContainerType};
use crate::style::{Slot, StyleDescriptor};
use crate::variant::{self, ComponentKind, PropSelection, VariantError};

use super::control;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::utils::{apply_box_style, render_style};

/// Tinted region that carries a status color around its children.
pub struct Container {
    id: ComponentId,
    container_type: ContainerType,
    padding: ContainerPadding,
    interactive: bool,
    disabled: bool,
    on_click: Option<ActivateHandler>,
    children: Vec<AnyElement>,
}

impl Container {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("container"),
            container_type: ContainerType::default(),
            padding: ContainerPadding::default(),
            interactive: false,
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn container_type(mut self, value: ContainerType) -> Self {
        self.container_type = value;
        self
    }

    pub fn padding(mut self, value: ContainerPadding) -> Self {
        self.padding = value;
        self
    }

    pub fn interactive(mut self, value: bool) -> Self {
        self.interactive = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn selection(&self) -> PropSelection {
        let state = if self.disabled {
            ContainerState::Disabled
        } else {
            ContainerState::Default
        };
        PropSelection::new()
            .axis(self.container_type)
            .axis(self.padding)
            .axis(state)
            .flag(INTERACTIVE_AXIS, self.interactive)
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> Result<StyleDescriptor, VariantError> {
        variant::resolve(ComponentKind::Container, &self.selection())
    }

    pub fn press(&self) -> PressBehavior {
        PressBehavior::new(self.interactive, self.disabled)
    }
}

impl Default for Container {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

crate::impl_with_id!(Container);

impl ParentElement for Container {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Container {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let press = self.press();
        let hovered = press.tracks_hover() && control::hovered_state(self.id.as_str());
        let style = render_style(&self.id, self.resolve(), hovered);

        let root = div().id(self.id.clone()).flex().flex_col();
        let root = apply_box_style(root, &style, Slot::Root).children(self.children);

        bind_press_adapter(
            root,
            PressAdapter::new(self.id.clone(), press).on_activate(self.on_click.clone()),
        )
    }
}

impl IntoElement for Container {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_disableable!(Container);
