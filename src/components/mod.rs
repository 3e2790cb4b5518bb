mod button;
mod card;
mod container;
pub(crate) mod control;
mod icon;
mod interaction_adapter;
mod pill;
mod toast;
mod toggle;
pub(crate) mod utils;

pub use button::Button;
pub use card::Card;
pub use container::Container;
pub use control::release_state;
pub use icon::Icon;
pub use pill::Pill;
pub use toast::ToastViewport;
pub use toggle::{Toggle, ToggleState};

#[cfg(test)]
mod test_component_smoke;
#[cfg(test)]
mod test_state_logic;
