use crate::id::ComponentId;
use crate::motion::MotionConfig;
use crate::provider::DesignProvider;

pub trait WithId: Sized {
    fn id(&self) -> &ComponentId;

    fn id_mut(&mut self) -> &mut ComponentId;

    fn with_id(mut self, id: impl Into<ComponentId>) -> Self {
        *self.id_mut() = id.into();
        self
    }
}

pub trait Disableable: Sized {
    fn disabled(self, value: bool) -> Self;
}

pub trait MotionAware: Sized {
    fn motion(self, value: MotionConfig) -> Self;
}

/// Shells pick up diagnostics, icons and motion from the host's provider.
pub trait ProviderAware: Sized {
    fn provider(self, provider: &DesignProvider) -> Self;
}

#[macro_export]
macro_rules! impl_disableable {
    ($type:ty) => {
        impl $crate::contracts::Disableable for $type {
            fn disabled(self, value: bool) -> Self {
                <$type>::disabled(self, value)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_with_id {
    ($type:ty) => {
        impl $crate::contracts::WithId for $type {
            fn id(&self) -> &$crate::id::ComponentId {
                &self.id
            }

            fn id_mut(&mut self) -> &mut $crate::id::ComponentId {
                &mut self.id
            }
        }
    };
}
