pub mod a11y;
pub mod components;
pub mod contracts;
pub mod diagnostics;
pub mod feedback;
pub mod icon;
pub mod id;
pub mod interaction;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod recipes;
pub mod style;
pub mod tokens;
pub mod variant;

pub use provider::DesignProvider;

#[cfg(test)]
mod test_public_api;
