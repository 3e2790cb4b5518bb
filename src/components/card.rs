use std::rc::Rc;

use gpui::{
    AnyElement, ClickEvent, Component, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Styled, Window, div,
};

use crate::id::ComponentId;
use crate::interaction::PressBehavior;
use crate::recipes::{CardElevation, CardPadding, CardState, CardVariant};
use crate::style::{Slot, StyleDescriptor};
use crate::variant::{self, ComponentKind, PropSelection, VariantError};

use super::control;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::utils::{apply_box_style, render_style};

/// Surface for grouped content. Only the `interactive` variant responds to input.
pub struct Card {
    id: ComponentId,
    variant: CardVariant,
    padding: CardPadding,
    elevation: CardElevation,
    disabled: bool,
    on_click: Option<ActivateHandler>,
    children: Vec<AnyElement>,
}

impl Card {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("card"),
            variant: CardVariant::default(),
            padding: CardPadding::default(),
            elevation: CardElevation::default(),
            disabled: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    pub fn variant(mut self, value: CardVariant) -> Self {
        self.variant = value;
        self
    }

    pub fn padding(mut self, value: CardPadding) -> Self {
        self.padding = value;
        self
    }

    pub fn elevation(mut self, value: CardElevation) -> Self {
        self.elevation = value;
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
            CardState::Disabled
        } else {
            CardState::Default
        };
        PropSelection::new()
            .axis(self.variant)
            .axis(self.padding)
            .axis(self.elevation)
            .axis(state)
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> Result<StyleDescriptor, VariantError> {
        variant::resolve(ComponentKind::Card, &self.selection())
    }

    pub fn press(&self) -> PressBehavior {
        PressBehavior::new(self.variant == CardVariant::Interactive, self.disabled)
    }
}

impl Default for Card {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

crate::impl_with_id!(Card);

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
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

impl IntoElement for Card {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_disableable!(Card);
