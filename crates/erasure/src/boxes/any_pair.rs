use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use crate::boxes::UnpackPair;
use crate::opaque::{Erased, Opaque};

/// A two-valued box with its concrete type erased.
///
/// `AnyPair<A, B>` keeps both associated types, `AnyPair<Erased, Erased>` erases both.
pub struct AnyPair<A, B> {
    first_fn: Box<dyn Fn() -> A + Send + Sync>,
    second_fn: Box<dyn Fn() -> B + Send + Sync>,
}

impl<A, B> AnyPair<A, B> {
    pub fn new<P>(inner: P) -> Self
    where
        P: UnpackPair<First = A, Second = B> + Send + Sync + 'static,
    {
        let first = Arc::new(inner);
        let second = first.clone();

        Self {
            first_fn: Box::new(move || first.unpack_first()),
            second_fn: Box::new(move || second.unpack_second()),
        }
    }
}

impl AnyPair<Erased, Erased> {
    pub fn erasing<P>(inner: P) -> Self
    where
        P: UnpackPair + Send + Sync + 'static,
        P::First: Opaque,
        P::Second: Opaque,
    {
        let first = Arc::new(inner);
        let second = first.clone();

        Self {
            first_fn: Box::new(move || Box::new(first.unpack_first()) as Erased),
            second_fn: Box::new(move || Box::new(second.unpack_second()) as Erased),
        }
    }
}

impl<A, B> UnpackPair for AnyPair<A, B> {
    type First = A;
    type Second = B;

    fn unpack_first(&self) -> A {
        (self.first_fn)()
    }

    fn unpack_second(&self) -> B {
        (self.second_fn)()
    }
}

impl<A, B> Debug for AnyPair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyPair").finish_non_exhaustive()
    }
}
