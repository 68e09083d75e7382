use std::any::Any;
use crate::dynamic::recover::Recover;

/// Equality against an erased value, using `Self`'s `PartialEq` after recovering a `&Self`.
///
/// Returns `false` when the other value cannot be recovered as `Self`.
pub trait DynamicEq {
    fn dynamic_eq(&self, other: &dyn Any) -> bool;
}

impl<T: PartialEq + Recover> DynamicEq for T {
    fn dynamic_eq(&self, other: &dyn Any) -> bool {
        T::recover(other).map_or(false, |other|
            self == other
        )
    }
}
