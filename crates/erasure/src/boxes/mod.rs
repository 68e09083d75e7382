//! Wrappers that erase the concrete type of a box while keeping, or erasing, the type of what it
//! holds.
//!
//! Each capability has an associated type. Adapters come in two flavours selected by their type
//! parameter: `AnyUnpack<i32>` keeps the associated type, `AnyUnpack<Erased>` erases it to the
//! universal [`Erased`](crate::opaque::Erased) value type.

use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod any_pack;
pub mod any_pair;
pub mod any_unpack;
pub mod samples;
pub mod wrapped;

/// A box that hands out a value.
pub trait Unpack {
    type Inside;

    fn unpack(&self) -> Self::Inside;
}

/// A box that accepts a value.
pub trait Pack {
    type Inside;

    fn pack(&self, value: Self::Inside) -> Result<Receipt, PackError>;
}

/// A box that hands out two values, of possibly different types.
pub trait UnpackPair {
    type First;
    type Second;

    fn unpack_first(&self) -> Self::First;
    fn unpack_second(&self) -> Self::Second;
}

/// Acknowledgement of a successful pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub box_name: &'static str,
    pub value: String,
}

impl Display for Receipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "packed an {} in {}", self.value, self.box_name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    #[error("Type mismatch. target: {target}, expected: {expected}, received: {received}")]
    TypeMismatch {
        target: &'static str,
        expected: &'static str,
        received: &'static str,
    },
}
