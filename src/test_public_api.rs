use gpui::{IntoElement, ParentElement, div};

use crate::prelude::*;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn prelude_exports_render_components() {
    assert_render_once::<Button>();
    assert_render_once::<Pill>();
    assert_render_once::<Card>();
    assert_render_once::<Container>();
    assert_render_once::<Toggle>();
    assert_render_once::<ToastViewport>();
    assert_render_once::<Icon>();
}

#[test]
fn prelude_smoke_builds_every_component() {
    let provider = DesignProvider::new()
        .set_diagnostics(Diagnostics::silent())
        .set_motion(MotionConfig::new().level(MotionLevel::Reduced));

    let _ = into_any(
        Button::new("Save")
            .button_type(ButtonType::Secondary)
            .size(ButtonSize::Small)
            .provider(&provider),
    );
    let _ = into_any(
        Pill::new("Beta")
            .pill_type(PillType::Info)
            .size(PillSize::Small)
            .provider(&provider),
    );
    let _ = into_any(
        Card::new()
            .variant(CardVariant::Outlined)
            .padding(CardPadding::Large)
            .elevation(CardElevation::High)
            .child(div()),
    );
    let _ = into_any(
        Container::new()
            .container_type(ContainerType::Warning)
            .padding(ContainerPadding::Small),
    );
    let _ = into_any(
        Toggle::new()
            .label("Sync")
            .size(ToggleSize::Small)
            .provider(&provider),
    );
    let _ = into_any(ToastViewport::from_provider(&provider));
}

#[test]
fn every_component_kind_resolves_its_defaults() {
    for kind in ComponentKind::ALL {
        let style = crate::variant::resolve(kind, &PropSelection::new())
            .unwrap_or_else(|error| panic!("{}: {error}", kind.as_str()));
        style
            .resolve_tokens(TokenTable::global())
            .unwrap_or_else(|error| panic!("{}: {error}", kind.as_str()));
    }
}
