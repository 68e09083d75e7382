use std::any::Any;

/// Access to a value as `&dyn Any`, including through a trait object that has `AsAny` as a supertrait.
///
/// Beware of calling `as_any` on a smart pointer (`Box`, `Arc`) holding a trait object, the pointer
/// itself is `Any` and will be returned instead of the value; dereference first.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
