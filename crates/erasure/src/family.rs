//! A capability type with two variants, used to show how equality behaves when boxed values share a
//! capability but not a concrete type.
//!
//! `Child1` and `Child2` each embed a `Base`. A `Base` can be recovered from either of them, the
//! variants can only be recovered as themselves.

use std::any::Any;
use util::dynamic::recover::Recover;
use crate::equatable::{AnyEquatable, Normalize, Strategy};

pub trait Counted {
    fn count(&self) -> usize;
}

/// An array-like capability type that defines equality in terms of its `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base {
    count: usize,
}

impl Base {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Counted for Base {
    fn count(&self) -> usize {
        self.count
    }
}

impl Recover for Base {
    fn recover(value: &dyn Any) -> Option<&Self> {
        value.downcast_ref::<Base>()
            .or_else(|| value.downcast_ref::<Child1>().map(|child| &child.base))
            .or_else(|| value.downcast_ref::<Child2>().map(|child| &child.base))
    }
}

impl Normalize for Base {
    type Capability = Base;

    fn normalize(self) -> Self::Capability {
        self
    }
}

macro_rules! variant {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            base: Base,
        }

        impl $name {
            pub fn new(count: usize) -> Self {
                Self { base: Base::new(count) }
            }

            pub fn base(&self) -> &Base {
                &self.base
            }
        }

        impl Counted for $name {
            fn count(&self) -> usize {
                self.base.count()
            }
        }

        impl Recover for $name {}

        impl From<$name> for Base {
            fn from(value: $name) -> Self {
                value.base
            }
        }

        impl Normalize for $name {
            type Capability = Base;

            fn normalize(self) -> Self::Capability {
                self.into()
            }
        }
    };
}

variant!(
    /// First variant of [`Base`].
    Child1
);
variant!(
    /// Second variant of [`Base`], unrelated to [`Child1`].
    Child2
);

/// The four boxes of the equality demonstration, in order: three with equal counts (base,
/// first variant, second variant) and a second variant with a different count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    /// Every value boxed as-is.
    Naive,
    /// The two equal-count variants converted to [`Base`] by the caller before boxing, the rest
    /// boxed as-is.
    Workaround,
    /// Every value boxed with [`AnyEquatable::normalized`].
    Normalized,
}

impl Fixture {
    pub const ALL: [Fixture; 3] = [Fixture::Naive, Fixture::Workaround, Fixture::Normalized];

    pub fn title(&self) -> &'static str {
        match self {
            Fixture::Naive => "Test",
            Fixture::Workaround => "Workaround",
            Fixture::Normalized => "Normalized",
        }
    }

    pub fn boxes(&self) -> Vec<AnyEquatable> {
        match self {
            Fixture::Naive => boxes_with(Strategy::Naive),
            Fixture::Normalized => boxes_with(Strategy::Normalized),
            Fixture::Workaround => vec![
                AnyEquatable::new(Base::new(3)),
                AnyEquatable::new(Base::from(Child1::new(3))),
                AnyEquatable::new(Base::from(Child2::new(3))),
                AnyEquatable::new(Child2::new(4)),
            ],
        }
    }
}

fn boxes_with(strategy: Strategy) -> Vec<AnyEquatable> {
    vec![
        strategy.wrap(Base::new(3)),
        strategy.wrap(Child1::new(3)),
        strategy.wrap(Child2::new(3)),
        strategy.wrap(Child2::new(4)),
    ]
}
