use std::rc::Rc;

use gpui::{
    Animation, AnimationExt, Component, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window, div, px,
};

use crate::contracts::{MotionAware, ProviderAware};
use crate::id::ComponentId;
use crate::interaction::PressBehavior;
use crate::motion::{MotionConfig, ThumbAnimation};
use crate::provider::DesignProvider;
use crate::recipes::toggle::CHECKED_AXIS;
use crate::recipes::{ToggleSize, ToggleStateAxis};
use crate::style::{Property, ResolvedStyle, Slot, StyleDescriptor};
use crate::variant::{self, ComponentKind, PropSelection, VariantError};

use super::control::{self, CHECKED_SLOT};
use super::interaction_adapter::{ActivateHandler, PressAdapter, bind_press_adapter};
use super::utils::{apply_box_style, apply_text_style, render_style};

const TRANSITIONED_SLOT: &str = "transitioned";
const RENDERED_SLOT: &str = "rendered";

type ToggleChangeHandler = Rc<dyn Fn(bool, &mut Window, &mut gpui::App)>;

/// The authoritative on/off value of a toggle.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ToggleState {
    on: bool,
}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }

    pub fn is_on(self) -> bool {
        self.on
    }

    /// Flips the state and reports the new value, unless `disabled`.
    pub fn activate(&mut self, disabled: bool, on_change: impl FnOnce(bool)) -> bool {
        if disabled {
            return false;
        }
        self.on = !self.on;
        on_change(self.on);
        true
    }
}

pub struct Toggle {
    id: ComponentId,
    label: Option<SharedString>,
    checked: Option<bool>,
    default_checked: bool,
    disabled: bool,
    size: ToggleSize,
    motion: MotionConfig,
    on_change: Option<ToggleChangeHandler>,
}

impl Toggle {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            id: ComponentId::auto("toggle"),
            label: None,
            checked: None,
            default_checked: false,
            disabled: false,
            size: ToggleSize::default(),
            motion: MotionConfig::default(),
            on_change: None,
        }
    }

    pub fn label(mut self, value: impl Into<SharedString>) -> Self {
        self.label = Some(value.into());
        self
    }

    /// Controls the value from outside; activation then only reports the request.
    pub fn checked(mut self, value: bool) -> Self {
        self.checked = Some(value);
        self
    }

    pub fn default_checked(mut self, value: bool) -> Self {
        self.default_checked = value;
        self
    }

    pub fn disabled(mut self, value: bool) -> Self {
        self.disabled = value;
        self
    }

    pub fn size(mut self, value: ToggleSize) -> Self {
        self.size = value;
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(bool, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn is_checked(&self) -> bool {
        control::bool_state(
            self.id.as_str(),
            CHECKED_SLOT,
            self.checked,
            self.default_checked,
        )
    }

    pub fn selection(&self) -> PropSelection {
        let state = if self.disabled {
            ToggleStateAxis::Disabled
        } else {
            ToggleStateAxis::Default
        };
        PropSelection::new()
            .axis(self.size)
            .axis(state)
            .flag(CHECKED_AXIS, self.is_checked())
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> Result<StyleDescriptor, VariantError> {
        variant::resolve(ComponentKind::Toggle, &self.selection())
    }

    pub fn press(&self) -> PressBehavior {
        PressBehavior::new(true, self.disabled)
    }

    pub fn thumb_animation(&self) -> Option<ThumbAnimation> {
        ThumbAnimation::from_config(self.motion)
    }

    fn activate_handler(&self, checked: bool) -> ActivateHandler {
        let id = self.id.clone();
        let controlled = self.checked.is_some();
        let disabled = self.disabled;
        let on_change = self.on_change.clone();
        Rc::new(move |_, window, cx| {
            let mut state = ToggleState::new(checked);
            state.activate(disabled, |next| {
                if !controlled {
                    control::set_bool_state(id.as_str(), CHECKED_SLOT, next);
                }
                if let Some(handler) = on_change.as_ref() {
                    (handler)(next, window, cx);
                }
            });
        })
    }
}

impl Default for Toggle {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

crate::impl_with_id!(Toggle);

impl MotionAware for Toggle {
    fn motion(mut self, value: MotionConfig) -> Self {
        self.motion = value;
        self
    }
}

impl ProviderAware for Toggle {
    fn provider(mut self, provider: &DesignProvider) -> Self {
        self.motion = provider.motion();
        self
    }
}

/// Records the value rendered for `id`; returns whether it differs from the last render.
///
/// The thumb only animates once a rendered value has actually changed, so a
/// controlled toggle whose owner keeps the old value stays put.
fn note_rendered(id: &str, checked: bool) -> bool {
    let changed = control::replace_bool_state(id, RENDERED_SLOT, checked)
        .is_some_and(|previous| previous != checked);
    if changed {
        control::set_bool_state(id, TRANSITIONED_SLOT, true);
    }
    changed
}

/// Horizontal inset and travel of the thumb inside the track.
fn thumb_geometry(style: &ResolvedStyle) -> (f32, f32, f32) {
    let track_w = style.px(Slot::Track, Property::Width).unwrap_or(36.0);
    let track_h = style.px(Slot::Track, Property::Height).unwrap_or(20.0);
    let thumb = style.px(Slot::Thumb, Property::Width).unwrap_or(16.0);
    let inset_x = style
        .px(Slot::Track, Property::PaddingX)
        .unwrap_or((track_h - thumb) / 2.0);
    let inset_y = ((track_h - thumb) / 2.0).max(0.0);
    let travel = (track_w - thumb - inset_x * 2.0).max(0.0);
    (inset_x, inset_y, travel)
}

impl RenderOnce for Toggle {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let checked = self.is_checked();
        let press = self.press();
        let hovered = press.tracks_hover() && control::hovered_state(self.id.as_str());
        let style = render_style(&self.id, self.resolve(), hovered);
        let (inset_x, inset_y, travel) = thumb_geometry(&style);

        let thumb = div()
            .absolute()
            .top(px(inset_y))
            .left(px(inset_x + ThumbAnimation::rest_position(checked) * travel));
        let thumb = apply_box_style(thumb, &style, Slot::Thumb);

        note_rendered(self.id.as_str(), checked);
        let transitioned = control::bool_state(self.id.as_str(), TRANSITIONED_SLOT, None, false);
        let thumb = match self.thumb_animation() {
            Some(animation) if transitioned => thumb
                .with_animation(
                    gpui::SharedString::from(self.id.slot(if checked { "thumb-on" } else { "thumb-off" })),
                    Animation::new(animation.duration()),
                    move |this, delta| {
                        this.left(px(inset_x + animation.position(checked, delta) * travel))
                    },
                )
                .into_any_element(),
            _ => thumb.into_any_element(),
        };

        let track = div().relative().flex_none();
        let track = apply_box_style(track, &style, Slot::Track).child(thumb);

        let mut root = div()
            .id(self.id.clone())
            .flex()
            .flex_row()
            .items_center()
            .child(track);
        root = apply_box_style(root, &style, Slot::Root);
        if let Some(label) = self.label.clone() {
            root = root.child(apply_text_style(div(), &style, Slot::Label).child(label));
        }

        let handler = self.activate_handler(checked);
        bind_press_adapter(
            root,
            PressAdapter::new(self.id.clone(), press).on_activate(Some(handler)),
        )
    }
}

impl IntoElement for Toggle {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}

crate::impl_disableable!(Toggle);
