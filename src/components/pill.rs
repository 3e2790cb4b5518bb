use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    ClickEvent, Component, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window, div,
};

use crate::a11y::{self, SlotInput, Visibility, VisibilityInput};
use crate::contracts::ProviderAware;
use crate::diagnostics::{ConfigurationIssue, Diagnostics};
use crate::icon::{IconProvider, IconSize, IconSource, SvgIcons};
use crate::id::ComponentId;
use crate::interaction::PressBehavior;
use crate::provider::DesignProvider;
use crate::recipes::pill::{ICON_ONLY_AXIS, INTERACTIVE_AXIS, TRUNCATE_AXIS};
use crate::recipes::{PillSize, PillState, PillType};
use crate::style::{Property, Slot, StyleDescriptor};
use crate::variant::{AxisValue, ComponentKind, PropSelection, VariantError};

use super::Icon;
use super::control;
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::utils::{apply_box_style, apply_text_style, icon_px, render_style, to_hsla};

/// Compact status label with optional icons and subtexts on either side.
pub struct Pill {
    id: ComponentId,
    label: Option<SharedString>,
    left_icon: Option<IconSource>,
    right_icon: Option<IconSource>,
    left_subtext: Option<SharedString>,
    right_subtext: Option<SharedString>,
    show_left_icon: Option<bool>,
    show_right_icon: Option<bool>,
    show_left_subtext: Option<bool>,
    show_right_subtext: Option<bool>,
    pill_type: PillType,
    size: PillSize,
    interactive: bool,
    truncate: bool,
    icon_only: bool,
    disabled: bool,
    accessible_label: Option<SharedString>,
    description_id: Option<SharedString>,
    diagnostics: Diagnostics,
    icons: Arc<dyn IconProvider>,
    on_click: Option<ActivateHandler>,
}

impl Pill {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            id: ComponentId::auto("pill"),
            label: Some(label.into()),
            left_icon: None,
            right_icon: None,
            left_subtext: None,
            right_subtext: None,
            show_left_icon: None,
            show_right_icon: None,
            show_left_subtext: None,
            show_right_subtext: None,
            pill_type: PillType::default(),
            size: PillSize::default(),
            interactive: false,
            truncate: false,
            icon_only: false,
            disabled: false,
            accessible_label: None,
            description_id: None,
            diagnostics: Diagnostics::default(),
            icons: Arc::new(SvgIcons::default()),
            on_click: None,
        }
    }

    pub fn pill_type(mut self, value: PillType) -> Self {
        self.pill_type = value;
        self
    }

    pub fn size(mut self, value: PillSize) -> Self {
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

    pub fn left_subtext(mut self, value: impl Into<SharedString>) -> Self {
        self.left_subtext = Some(value.into());
        self
    }

    pub fn right_subtext(mut self, value: impl Into<SharedString>) -> Self {
        self.right_subtext = Some(value.into());
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

    pub fn show_left_subtext(mut self, value: bool) -> Self {
        self.show_left_subtext = Some(value);
        self
    }

    pub fn show_right_subtext(mut self, value: bool) -> Self {
        self.show_right_subtext = Some(value);
        self
    }

    pub fn interactive(mut self, value: bool) -> Self {
        self.interactive = value;
        self
    }

    pub fn truncate(mut self, value: bool) -> Self {
        self.truncate = value;
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

    /// Attaching a handler does not make the pill interactive; see [`Pill::interactive`].
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn selection(&self) -> PropSelection {
        let state = if self.disabled {
            PillState::Disabled
        } else {
            PillState::Default
        };
        PropSelection::new()
            .axis(self.pill_type)
            .axis(self.size)
            .axis(state)
            .flag(INTERACTIVE_AXIS, self.interactive)
            .flag(TRUNCATE_AXIS, self.truncate)
            .flag(ICON_ONLY_AXIS, self.icon_only)
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> Result<StyleDescriptor, VariantError> {
        crate::variant::resolve(ComponentKind::Pill, &self.selection())
    }

    pub fn visibility(&self) -> Result<Visibility, VariantError> {
        self.visibility_into(&self.diagnostics)
    }

    /// Derives visibility and checks the type spelling, forwarding the findings
    /// only when they differ from the previous render of the same id.
    pub(crate) fn rendered_visibility(&self) -> Result<Visibility, VariantError> {
        let (recorder, recorded) = Diagnostics::recording();
        self.deprecated_type_into(&recorder);
        let visibility = self.visibility_into(&recorder)?;
        control::report_changed(self.id.as_str(), &self.diagnostics, recorded.take());
        Ok(visibility)
    }

    fn visibility_into(&self, diagnostics: &Diagnostics) -> Result<Visibility, VariantError> {
        let recipe = ComponentKind::Pill.recipe();
        let selection = recipe.normalize(&self.selection())?;
        let mut input = VisibilityInput::for_selection(recipe, &selection);
        input.label = self.label.as_ref().map(gpui::SharedString::as_str);
        input.left_icon = SlotInput::new(self.left_icon.is_some(), self.show_left_icon);
        input.right_icon = SlotInput::new(self.right_icon.is_some(), self.show_right_icon);
        input.left_subtext = SlotInput::new(self.left_subtext.is_some(), self.show_left_subtext);
        input.right_subtext =
            SlotInput::new(self.right_subtext.is_some(), self.show_right_subtext);
        input.accessible_label = self.accessible_label.as_ref().map(gpui::SharedString::as_str);
        input.accessible_description = self.description_id.as_ref().map(gpui::SharedString::as_str);
        Ok(a11y::derive(&input, diagnostics))
    }

    /// Reports a deprecated type spelling. Returns whether one was reported.
    pub fn report_deprecated_type(&self) -> bool {
        self.deprecated_type_into(&self.diagnostics)
    }

    fn deprecated_type_into(&self, diagnostics: &Diagnostics) -> bool {
        if !self.pill_type.is_deprecated() {
            return false;
        }
        diagnostics.configuration(
            ComponentKind::Pill.as_str(),
            ConfigurationIssue::DeprecatedAlias {
                axis: PillType::AXIS,
                alias: self.pill_type.as_str(),
                replacement: self.pill_type.canonical().as_str(),
            },
        );
        true
    }

    pub fn press(&self) -> PressBehavior {
        PressBehavior::new(self.interactive, self.disabled)
    }
}

crate::impl_with_id!(Pill);

impl ProviderAware for Pill {
    fn provider(mut self, provider: &DesignProvider) -> Self {
        self.diagnostics = provider.diagnostics();
        self.icons = provider.icons();
        self
    }
}

impl RenderOnce for Pill {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let press = self.press();
        let hovered = press.tracks_hover() && control::hovered_state(self.id.as_str());
        let style = render_style(&self.id, self.resolve(), hovered);
        let visibility = self.rendered_visibility().unwrap_or_else(|error| {
            log::error!("{}: {error}", self.id);
            Visibility::default()
        });
        let icon_size = visibility.icon_size.unwrap_or(IconSize::Small);
        let foreground = style.color(Slot::Root, Property::Foreground).map(to_hsla);

        let icon = |source: IconSource| {
            let icon = Icon::new(source)
                .size(icon_size)
                .size_px(icon_px(&style))
                .provider(self.icons.clone());
            match foreground {
                Some(color) => icon.color(color),
                None => icon,
            }
        };
        let subtext = |text: SharedString| {
            apply_text_style(div().flex_none(), &style, Slot::Subtext).child(text)
        };

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .overflow_hidden();
        root = apply_box_style(root, &style, Slot::Root);

        if visibility.left_subtext
            && let Some(text) = self.left_subtext.clone()
        {
            root = root.child(subtext(text));
        }
        if visibility.left_icon
            && let Some(source) = self.left_icon.clone()
        {
            root = root.child(icon(source));
        }
        if visibility.label
            && let Some(label) = self.label.clone()
        {
            root = root.child(
                apply_text_style(div().min_w_0(), &style, Slot::Label).child(label),
            );
        }
        if visibility.right_icon
            && let Some(source) = self.right_icon.clone()
        {
            root = root.child(icon(source));
        }
        if visibility.right_subtext
            && let Some(text) = self.right_subtext.clone()
        {
            root = root.child(subtext(text));
        }

        bind_press_adapter(
            root,
            PressAdapter::new(self.id.clone(), press).on_activate(self.on_click.clone()),
        )
    }
}

impl IntoElement for Pill {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_disableable!(Pill);
