use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    ClickEvent, Component, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div,
};

use crate::a11y::{self, SlotInput, Visibility, VisibilityInput};
use crate::contracts::ProviderAware;
use crate::diagnostics::Diagnostics;
use crate::icon::{IconProvider, IconSize, IconSource, SvgIcons};
use crate::id::ComponentId;
use crate::interaction::PressBehavior;
use crate::provider::DesignProvider;
use crate::recipes::button::ICON_ONLY_AXIS;
use crate::recipes::{ButtonSize, ButtonState, ButtonType};
use crate::style::{Property, Slot, StyleDescriptor};
use crate::variant::{self, ComponentKind, PropSelection, VariantError};

use super::Icon;
use super::control;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::utils::{apply_box_style, apply_text_style, icon_px, render_style, to_hsla};

pub struct Button {
    id: ComponentId,
    label: Option<SharedString>,
    left_icon: Option<IconSource>,
    right_icon: Option<IconSource>,
    show_left_icon: Option<bool>,
    show_right_icon: Option<bool>,
    button_type: ButtonType,
    size: ButtonSize,
    icon_only: bool,
    disabled: bool,
    accessible_label: Option<SharedString>,
    description_id: Option<SharedString>,
    diagnostics: Diagnostics,
    icons: Arc<dyn IconProvider>,
    on_click: Option<ActivateHandler>,
}

impl Button {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("button"),
            label: Some(label.into()),
            left_icon: None,
            right_icon: None,
            show_left_icon: None,
            show_right_icon: None,
            button_type: ButtonType::default(),
            size: ButtonSize::default(),
            icon_only: false,
            disabled: false,
            accessible_label: None,
            description_id: None,
            diagnostics: Diagnostics::default(),
            icons: Arc::new(SvgIcons::default()),
            on_click: None,
        }
    }

    /// A square button showing only `icon`. Give it an [`Button::accessible_label`].
    #[track_caller]
    pub fn icon(icon: impl Into<IconSource>) -> Self {
        let mut button = Self::new("");
        button.label = None;
        button.left_icon = Some(icon.into());
        button.icon_only = true;
        button
    }

    pub fn button_type(mut self, value: ButtonType) -> Self {
        self.button_type = value;
        self
    }

    pub fn size(mut self, value: ButtonSize) -> Self {
        self.size = value;
        self
    }

    pub fn left_icon(mut self, icon: impl Into<IconSource>) -> Self {
        self.left_icon = Some(icon.into());
        self
    }

    pub fn right_icon(mut self, icon: impl Into<IconSource>) -> Self {
        self.right_icon = Some(icon.into());
        self
    }

    pub fn show_left_icon(mut self, value: bool) -> Self {
        self.show_left_icon = Some(value);
        self
    }

    pub fn show_right_icon(mut self, value: bool) -> Self {
        self.show_right_icon = Some(value);
        self
    }

    pub fn icon_only(mut self, value: bool) -> Self {
        self.icon_only = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn accessible_label(mut self, value: impl Into<SharedString>) -> Self {
        self.accessible_label = Some(value.into());
        self
    }

    pub fn description_id(mut self, value: impl Into<SharedString>) -> Self {
        self.description_id = Some(value.into());
        self
    }

    pub fn diagnostics(mut self, value: Diagnostics) -> Self {
        self.diagnostics = value;
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
            ButtonState::Disabled
        } else {
            ButtonState::Default
        };
        PropSelection::new()
            .axis(self.button_type)
            .axis(self.size)
            .axis(state)
            .flag(ICON_ONLY_AXIS, self.icon_only)
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> Result<StyleDescriptor, VariantError> {
        variant::resolve(ComponentKind::Button, &self.selection())
    }

    pub fn visibility(&self) -> Result<Visibility, VariantError> {
        self.visibility_into(&self.diagnostics)
    }

    /// Like [`Button::visibility`], but reports only when the findings differ
    /// from the previous render of the same id.
    pub(crate) fn rendered_visibility(&self) -> Result<Visibility, VariantError> {
        let (recorder, recorded) = Diagnostics::recording();
        let visibility = self.visibility_into(&recorder)?;
        control::report_changed(self.id.as_str(), &self.diagnostics, recorded.take());
        Ok(visibility)
    }

    fn visibility_into(&self, diagnostics: &Diagnostics) -> Result<Visibility, VariantError> {
        let recipe = ComponentKind::Button.recipe();
        let selection = recipe.normalize(&self.selection())?;
        let mut input = VisibilityInput::for_selection(recipe, &selection);
        input.label = self.label.as_ref().map(gpui::SharedString::as_str);
        input.left_icon = SlotInput::new(self.left_icon.is_some(), self.show_left_icon);
        input.right_icon = SlotInput::new(self.right_icon.is_some(), self.show_right_icon);
        input.accessible_label = self.accessible_label.as_ref().map(gpui::SharedString::as_str);
        input.accessible_description = self.description_id.as_ref().map(gpui::SharedString::as_str);
        Ok(a11y::derive(&input, diagnostics))
    }

    pub fn press(&self) -> PressBehavior {
        PressBehavior::new(true, self.disabled)
    }
}

crate::impl_with_id!(Button);

impl ProviderAware for Button {
    fn provider(mut self, provider: &DesignProvider) -> Self {
        self.diagnostics = provider.diagnostics();
        self.icons = provider.icons();
        self
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let press = self.press();
        let hovered = press.tracks_hover() && control::hovered_state(self.id.as_str());
        let style = render_style(&self.id, self.resolve(), hovered);
        let visibility = match self.rendered_visibility() {
            Ok(visibility) => visibility,
            Err(error) => {
                log::error!("{}: {error}", self.id);
                Visibility::default()
            }
        };
        let icon_size = visibility.icon_size.unwrap_or(IconSize::Small);

        let icon = |source: IconSource| {
            let mut icon = Icon::new(source)
                .size(icon_size)
                .size_px(icon_px(&style))
                .provider(self.icons.clone());
            if let Some(color) = style.color(Slot::Root, Property::Foreground) {
                icon = icon.color(to_hsla(color));
            }
            icon
        };

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .flex_none()
            .items_center();
        root = apply_box_style(root, &style, Slot::Root);

        if visibility.left_icon
            && let Some(source) = self.left_icon.clone()
        {
            root = root.child(icon(source));
        }
        if visibility.label
            && let Some(label) = self.label.clone()
        {
            root = root.child(apply_text_style(div(), &style, Slot::Label).child(label));
        }
        if visibility.right_icon
            && let Some(source) = self.right_icon.clone()
        {
            root = root.child(icon(source));
        }

        bind_press_adapter(
            root,
            PressAdapter::new(self.id.clone(), press).on_activate(self.on_click.clone()),
        )
    }
}

impl IntoElement for Button {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_disableable!(Button);
