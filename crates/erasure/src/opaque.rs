use std::any::Any;
use std::fmt::Debug;
use util::dynamic::as_any::AsAny;

/// A value whose concrete type has been erased.
///
/// Anything `'static`, `Debug` and shareable between threads qualifies.
pub trait Opaque: AsAny + Debug + Send + Sync {}

impl<T: Any + Debug + Send + Sync> Opaque for T {}

/// The universal value type that erasing adapters produce and accept.
pub type Erased = Box<dyn Opaque>;

pub fn erase<T: Opaque>(value: T) -> Erased {
    Box::new(value)
}

impl dyn Opaque {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}
