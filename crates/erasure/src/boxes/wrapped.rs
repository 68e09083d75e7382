use crate::boxes::Unpack;

/// Holds a box without erasing anything, the wrapper's type still names the box it holds.
#[derive(Debug, Clone)]
pub struct WrappedBox<B> {
    inner: B,
}

impl<B: Unpack> WrappedBox<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Unpack> Unpack for WrappedBox<B> {
    type Inside = B::Inside;

    fn unpack(&self) -> Self::Inside {
        self.inner.unpack()
    }
}
