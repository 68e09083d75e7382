use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tracing::trace;
use util::dynamic::as_any::AsAny;
use util::dynamic::dynamic_eq::DynamicEq;
use util::dynamic::recover::Recover;
use crate::opaque::Opaque;

/// An opaque value that can compare itself against other erased values.
pub trait Equatable: Opaque + DynamicEq {}

impl<T: Opaque + DynamicEq> Equatable for T {}

/// Existential wrapper around `PartialEq`.
///
/// The comparison is bound to the type the box was constructed from: `a == b` recovers `b`'s value
/// as `a`'s type (see [`Recover`]) and compares with that type's `PartialEq`, a failed recovery
/// is `false`.
///
/// Only `Eq` types can be boxed, so every box equals itself.
///
/// Boxing values of different variants of a common capability type with [`AnyEquatable::new`]
/// makes the result depend on which side runs the comparison. Use [`AnyEquatable::normalized`]
/// (or convert to the capability type before calling `new`) to keep `==` symmetric.
#[derive(Clone)]
pub struct AnyEquatable {
    value: Arc<dyn Equatable>,
}

impl AnyEquatable {
    /// Boxes `value` as-is, comparisons run at the level of `T`.
    pub fn new<T>(value: T) -> Self
    where
        T: Eq + Recover + Debug + Send + Sync,
    {
        Self { value: Arc::new(value) }
    }

    /// Boxes `value` after converting it to the capability type that defines its equality.
    pub fn normalized<T: Normalize>(value: T) -> Self {
        Self::new(value.normalize())
    }

    pub fn as_any(&self) -> &dyn Any {
        let value: &dyn Equatable = &*self.value;
        value.as_any()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Name of the type the comparison is bound to.
    pub fn type_name(&self) -> &'static str {
        let value: &dyn Equatable = &*self.value;
        value.type_name()
    }
}

impl PartialEq for AnyEquatable {
    fn eq(&self, other: &Self) -> bool {
        let lhs: &dyn Equatable = &*self.value;
        let rhs: &dyn Equatable = &*other.value;

        let result = lhs.dynamic_eq(rhs.as_any());
        trace!("compared. lhs: {}, rhs: {}, result: {}", lhs.type_name(), rhs.type_name(), result);

        result
    }
}

impl Debug for AnyEquatable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value: &dyn Equatable = &*self.value;
        f.debug_tuple("AnyEquatable")
            .field(&value)
            .finish()
    }
}

/// Conversion of a value to the capability type that defines its equality.
///
/// Types that are their own capability convert to themselves.
pub trait Normalize {
    type Capability: Eq + Recover + Debug + Send + Sync;

    fn normalize(self) -> Self::Capability;
}

/// Implements [`Normalize`] as the identity conversion for each listed type.
#[macro_export]
macro_rules! impl_identity_normalize {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::equatable::Normalize for $ty {
            type Capability = $ty;

            fn normalize(self) -> Self::Capability {
                self
            }
        })*
    };
}

impl_identity_normalize!(
    bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    String, &'static str,
);

/// How a value is turned into an [`AnyEquatable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Box the value as-is, see [`AnyEquatable::new`].
    Naive,
    /// Box the value's capability type, see [`AnyEquatable::normalized`].
    Normalized,
}

impl Strategy {
    pub fn wrap<T>(&self, value: T) -> AnyEquatable
    where
        T: Normalize + Eq + Recover + Debug + Send + Sync,
    {
        match self {
            Strategy::Naive => AnyEquatable::new(value),
            Strategy::Normalized => AnyEquatable::normalized(value),
        }
    }
}
