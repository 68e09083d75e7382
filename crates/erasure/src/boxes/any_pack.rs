use std::any::{type_name, Any};
use std::fmt::{Debug, Formatter};
use tracing::debug;
use util::dynamic::as_any::AsAny;
use crate::boxes::{Pack, PackError, Receipt};
use crate::opaque::{erase, Erased, Opaque};

type PackFn<T> = dyn Fn(T) -> Result<Receipt, PackError> + Send + Sync;

/// A box with its concrete type erased, accepting values.
///
/// `AnyPack<Erased>` accepts a value of any type and recovers the wrapped box's `Inside` from it
/// before packing. When that fails the wrapped box is not called and a
/// [`PackError::TypeMismatch`] is returned, callers are expected to skip the value.
pub struct AnyPack<T> {
    pack_fn: Box<PackFn<T>>,
}

impl<T> AnyPack<T> {
    pub fn new<B>(inner: B) -> Self
    where
        B: Pack<Inside = T> + Send + Sync + 'static,
    {
        Self { pack_fn: Box::new(move |value| inner.pack(value)) }
    }
}

impl AnyPack<Erased> {
    pub fn erasing<B>(inner: B) -> Self
    where
        B: Pack + Send + Sync + 'static,
        B::Inside: Any,
    {
        Self {
            pack_fn: Box::new(move |value: Erased| {
                let received = (*value).type_name();

                match value.into_any().downcast::<B::Inside>() {
                    Ok(value) => inner.pack(*value),
                    Err(_) => {
                        let error = PackError::TypeMismatch {
                            target: type_name::<B>(),
                            expected: type_name::<B::Inside>(),
                            received,
                        };
                        debug!("Skipping pack. reason: {}", error);
                        Err(error)
                    }
                }
            }),
        }
    }

    pub fn pack_value<V: Opaque>(&self, value: V) -> Result<Receipt, PackError> {
        self.pack(erase(value))
    }
}

impl<T> Pack for AnyPack<T> {
    type Inside = T;

    fn pack(&self, value: T) -> Result<Receipt, PackError> {
        (self.pack_fn)(value)
    }
}

impl<T> Debug for AnyPack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyPack").finish_non_exhaustive()
    }
}
