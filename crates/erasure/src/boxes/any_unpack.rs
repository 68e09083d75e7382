use std::fmt::{Debug, Formatter};
use crate::boxes::Unpack;
use crate::opaque::{Erased, Opaque};

/// A box with its concrete type erased.
///
/// `AnyUnpack<T>` only accepts boxes whose `Inside` is `T`, `AnyUnpack<Erased>` accepts any box
/// and erases what it unpacks.
pub struct AnyUnpack<T> {
    unpack_fn: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> AnyUnpack<T> {
    pub fn new<B>(inner: B) -> Self
    where
        B: Unpack<Inside = T> + Send + Sync + 'static,
    {
        Self { unpack_fn: Box::new(move || inner.unpack()) }
    }
}

impl AnyUnpack<Erased> {
    pub fn erasing<B>(inner: B) -> Self
    where
        B: Unpack + Send + Sync + 'static,
        B::Inside: Opaque,
    {
        Self { unpack_fn: Box::new(move || Box::new(inner.unpack()) as Erased) }
    }
}

impl<T> Unpack for AnyUnpack<T> {
    type Inside = T;

    fn unpack(&self) -> T {
        (self.unpack_fn)()
    }
}

impl<T> Debug for AnyUnpack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyUnpack").finish_non_exhaustive()
    }
}
