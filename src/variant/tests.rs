use super::*;
use crate::recipes::{ButtonSize, ButtonType, CardVariant, PillSize, PillType};
use crate::style::{NONE, Property, StyleValue};
use crate::tokens::TokenTable;

/// Every value combination of a recipe's axes, aliases included.
fn all_selections(recipe: &Recipe) -> Vec<PropSelection> {
    let mut selections = vec![PropSelection::new()];
    for axis in recipe.axes {
        let values = axis
            .allowed()
            .chain(axis.aliases.iter().map(|(alias, _)| *alias))
            .collect::<Vec<_>>();
        selections = selections
            .into_iter()
            .flat_map(|base| {
                values
                    .iter()
                    .map(move |value| base.clone().set(axis.name, *value))
            })
            .collect();
    }
    selections
        .into_iter()
        .flat_map(|selection| [selection.clone(), selection.disabled(true)])
        .collect()
}

fn token(name: &'static str) -> Option<StyleValue> {
    Some(StyleValue::Token(name))
}

fn literal(value: &'static str) -> Option<StyleValue> {
    Some(StyleValue::Literal(value))
}

#[test]
fn omitted_axes_resolve_like_explicit_defaults() {
    for kind in ComponentKind::ALL {
        let recipe = kind.recipe();
        let explicit = recipe
            .axes
            .iter()
            .fold(PropSelection::new(), |selection, axis| {
                selection.set(axis.name, axis.default)
            });
        assert_eq!(
            resolve(kind, &PropSelection::new()),
            resolve(kind, &explicit),
            "{kind}"
        );
    }
}

#[test]
fn every_combination_resolves_deterministically_against_known_tokens() {
    let table = TokenTable::global();
    for kind in ComponentKind::ALL {
        let recipe = kind.recipe();
        let disabled_fragment = recipe
            .disabled
            .and_then(|(axis, value)| recipe.axis(axis).and_then(|spec| spec.fragment(value)))
            .unwrap_or_default();
        for selection in all_selections(recipe) {
            let first = resolve(kind, &selection).expect("valid selection resolves");
            let second = resolve(kind, &selection).expect("valid selection resolves");
            assert_eq!(first, second, "{kind} {selection:?}");
            for name in first.token_names() {
                assert!(table.lookup(name).is_some(), "{kind} uses unknown token {name}");
            }
            assert!(first.resolve_tokens(table).is_ok(), "{kind} {selection:?}");

            let disabled = recipe
                .normalize(&selection)
                .expect("valid selection normalizes")
                .is_disabled();
            if !disabled {
                continue;
            }
            for decl in disabled_fragment {
                if !first.has_slot(decl.slot) {
                    continue;
                }
                assert_eq!(
                    first.read(decl.slot, decl.property),
                    Some(decl.value),
                    "{kind} {selection:?}: disabled {:?}.{:?} was overridden",
                    decl.slot,
                    decl.property
                );
            }
        }
    }
}

#[test]
fn typed_axis_values_are_accepted_by_their_recipe() {
    fn check<A: AxisValue>(kind: ComponentKind) {
        let axis = kind.recipe().axis(A::AXIS).expect("axis exists");
        assert_eq!(A::ALL[0].as_str(), axis.default, "{kind}.{}", A::AXIS);
        for value in A::ALL {
            assert!(axis.canonical(value.as_str()).is_some(), "{kind}.{}", A::AXIS);
        }
    }

    check::<ButtonType>(ComponentKind::Button);
    check::<ButtonSize>(ComponentKind::Button);
    check::<crate::recipes::ButtonState>(ComponentKind::Button);
    check::<PillType>(ComponentKind::Pill);
    check::<PillSize>(ComponentKind::Pill);
    check::<crate::recipes::PillState>(ComponentKind::Pill);
    check::<CardVariant>(ComponentKind::Card);
    check::<crate::recipes::CardPadding>(ComponentKind::Card);
    check::<crate::recipes::CardElevation>(ComponentKind::Card);
    check::<crate::recipes::CardState>(ComponentKind::Card);
    check::<crate::recipes::ContainerType>(ComponentKind::Container);
    check::<crate::recipes::ContainerPadding>(ComponentKind::Container);
    check::<crate::recipes::ContainerState>(ComponentKind::Container);
    check::<crate::recipes::ToggleSize>(ComponentKind::Toggle);
    check::<crate::recipes::ToggleStateAxis>(ComponentKind::Toggle);
}

#[test]
fn default_button_merges_primary_and_medium() {
    let style = resolve(
        ComponentKind::Button,
        &PropSelection::new().axis(ButtonSize::Medium),
    )
    .expect("resolves");
    assert_eq!(style.read(Slot::Root, Property::Background), token("color.bg.brand.strong"));
    assert_eq!(style.read(Slot::Root, Property::Height), token("size.control.md"));
    assert_eq!(style.read(Slot::Label, Property::FontSize), token("font.size.md"));
    assert_eq!(style.read(Slot::Root, Property::Opacity), literal("1"));
}

#[test]
fn compound_rules_override_axis_fragments_and_leave_the_rest() {
    let selection = PropSelection::new().axis(ButtonType::Transparent);
    let style = resolve(ComponentKind::Button, &selection).expect("resolves");
    assert_eq!(
        style.read(Slot::Root, Property::HoverBackground),
        token("color.bg.transparent-hover")
    );
    assert_eq!(style.read(Slot::Root, Property::Background), token("color.bg.transparent"));

    let disabled = resolve(ComponentKind::Button, &selection.set("state", "disabled"))
        .expect("resolves");
    assert_eq!(disabled.read(Slot::Root, Property::HoverBackground), literal(NONE));
}

#[test]
fn later_compound_rules_win() {
    let style = resolve(
        ComponentKind::Card,
        &PropSelection::new()
            .axis(CardVariant::Interactive)
            .set("elevation", "high"),
    )
    .expect("resolves");
    assert_eq!(style.read(Slot::Root, Property::HoverShadow), token("elevation.high"));
    assert_eq!(
        style.read(Slot::Root, Property::HoverBackground),
        token("color.bg.surface-hover")
    );
}

#[test]
fn disabled_flag_overrides_matching_compound_rules() {
    // The state axis still reads `default`, so the hover compound matches first.
    let style = resolve(
        ComponentKind::Card,
        &PropSelection::new()
            .axis(CardVariant::Interactive)
            .disabled(true),
    )
    .expect("resolves");
    assert_eq!(style.read(Slot::Root, Property::Opacity), literal("0.4"));
    assert_eq!(style.read(Slot::Root, Property::Cursor), literal("not-allowed"));
    for property in [
        Property::HoverBackground,
        Property::HoverBorderColor,
        Property::HoverShadow,
    ] {
        assert_eq!(style.read(Slot::Root, property), literal(NONE), "{property:?}");
    }
    assert_eq!(style.hovered(), style);
}

#[test]
fn disabled_state_axis_marks_selection_disabled() {
    let recipe = ComponentKind::Toggle.recipe();
    let selection = recipe
        .normalize(&PropSelection::new().set("state", "disabled"))
        .expect("valid");
    assert!(selection.is_disabled());
    let selection = recipe.normalize(&PropSelection::new()).expect("valid");
    assert!(!selection.is_disabled());
}

#[test]
fn invalid_values_and_axes_are_rejected() {
    assert_eq!(
        resolve(ComponentKind::Button, &PropSelection::new().set("size", "huge")),
        Err(VariantError::InvalidVariantValue {
            component: ComponentKind::Button,
            axis: "size".to_string(),
            value: "huge".to_string(),
        })
    );
    assert_eq!(
        resolve(ComponentKind::Card, &PropSelection::new().set("tone", "warm")),
        Err(VariantError::UnknownAxis {
            component: ComponentKind::Card,
            axis: "tone".to_string(),
        })
    );
    assert!("huge".parse::<ButtonSize>().is_err());
    assert_eq!("x-small".parse::<PillSize>(), Ok(PillSize::XSmall));
}

#[test]
fn deprecated_pill_aliases_match_their_replacements() {
    for (alias, canonical) in [("high-alert", "alert"), ("important-info", "info")] {
        let aliased = PropSelection::new()
            .set("type", alias)
            .flag(crate::recipes::pill::INTERACTIVE_AXIS, true);
        let current = PropSelection::new()
            .set("type", canonical)
            .flag(crate::recipes::pill::INTERACTIVE_AXIS, true);
        assert_eq!(
            resolve(ComponentKind::Pill, &aliased),
            resolve(ComponentKind::Pill, &current)
        );
    }
    assert_eq!(PillType::HighAlert.canonical(), PillType::Alert);
    assert!(PillType::ImportantInfo.is_deprecated());
    assert!(!PillType::Info.is_deprecated());
}

#[test]
fn icon_only_drops_text_slots_and_squares_the_root() {
    let style = resolve(
        ComponentKind::Button,
        &PropSelection::new()
            .axis(ButtonSize::Small)
            .flag(crate::recipes::button::ICON_ONLY_AXIS, true),
    )
    .expect("resolves");
    assert!(!style.has_slot(Slot::Label));
    assert!(!style.has_slot(Slot::Subtext));
    assert!(style.has_slot(Slot::Icon));
    assert_eq!(style.read(Slot::Root, Property::Width), token("size.control.sm"));
    assert_eq!(style.read(Slot::Root, Property::PaddingX), token("space.none"));
}

#[test]
fn extra_small_pills_have_no_icon_slot() {
    for size in PillSize::ALL.iter().copied() {
        let style = resolve(ComponentKind::Pill, &PropSelection::new().axis(size))
            .expect("resolves");
        assert_eq!(style.has_slot(Slot::Icon), size != PillSize::XSmall, "{size:?}");
        assert!(style.has_slot(Slot::Label));
    }
}

#[test]
fn large_buttons_request_large_icons() {
    let recipe = ComponentKind::Button.recipe();
    for size in ButtonSize::ALL.iter().copied() {
        let selection = recipe
            .normalize(&PropSelection::new().axis(size))
            .expect("valid");
        assert_eq!(recipe.uses_large_icons(&selection), size == ButtonSize::Large);
        assert!(recipe.supports_icons(&selection));
    }
}
