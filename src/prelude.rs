pub use crate::DesignProvider;
pub use crate::components::{
    Button, Card, Container, Icon, Pill, ToastViewport, Toggle, ToggleState,
};
pub use crate::contracts::{Disableable, MotionAware, ProviderAware, WithId};
pub use crate::diagnostics::{Diagnostic, DiagnosticSink, Diagnostics};
pub use crate::feedback::{
    DismissReason, ToastDefaults, ToastEntry, ToastId, ToastKind, ToastManager,
};
pub use crate::icon::{IconProvider, IconSize, IconSource, SvgIcons};
pub use crate::motion::{Easing, MotionConfig, MotionLevel};
pub use crate::recipes::{
    ButtonSize, ButtonType, CardElevation, CardPadding, CardVariant, ContainerPadding,
    ContainerType, PillSize, PillType, ToggleSize,
};
pub use crate::tokens::TokenTable;
pub use crate::variant::{ComponentKind, PropSelection, VariantError};
