//! Variant tables for every component kind.
//!
//! Each table lists its axes in merge order with the default value first.

pub mod button;
pub mod card;
pub mod container;
pub mod pill;
pub mod toggle;

use crate::variant::{ComponentKind, Recipe};

pub use button::{ButtonSize, ButtonState, ButtonType};
pub use card::{CardElevation, CardPadding, CardState, CardVariant};
pub use container::{ContainerPadding, ContainerState, ContainerType};
pub use pill::{PillSize, PillState, PillType};
pub use toggle::{ToggleSize, ToggleStateAxis};

pub fn recipe_for(kind: ComponentKind) -> &'static Recipe {
    match kind {
        ComponentKind::Button => &button::RECIPE,
        ComponentKind::Pill => &pill::RECIPE,
        ComponentKind::Card => &card::RECIPE,
        ComponentKind::Container => &container::RECIPE,
        ComponentKind::Toggle => &toggle::RECIPE,
    }
}
