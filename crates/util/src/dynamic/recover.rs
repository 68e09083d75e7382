use std::any::Any;

/// Fallible, lossless recovery of a `&Self` from an erased value.
///
/// The default is an exact-type downcast. A type that other types can be viewed as (e.g. a struct
/// embedded in several variants) overrides `recover` to accept those variants as well.
///
/// A failed recovery is an expected outcome and is reported as `None`.
pub trait Recover: Any + Sized {
    fn recover(value: &dyn Any) -> Option<&Self> {
        value.downcast_ref()
    }
}

/// Implements [`Recover`] with exact-type downcasting for each listed type.
#[macro_export]
macro_rules! impl_exact_recover {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::dynamic::recover::Recover for $ty {})*
    };
}

impl_exact_recover!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    String, &'static str,
);
