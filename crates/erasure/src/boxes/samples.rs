//! Sample boxes.

use crate::boxes::{Pack, PackError, Receipt, Unpack, UnpackPair};

#[derive(Debug, Clone, Copy, Default)]
pub struct IntBox;

#[derive(Debug, Clone, Copy, Default)]
pub struct AnotherIntBox;

#[derive(Debug, Clone, Copy, Default)]
pub struct StringBox;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntIntBox;

#[derive(Debug, Clone, Copy, Default)]
pub struct IntStringBox;

impl Unpack for IntBox {
    type Inside = i32;

    fn unpack(&self) -> i32 {
        42
    }
}

impl Unpack for AnotherIntBox {
    type Inside = i32;

    fn unpack(&self) -> i32 {
        21
    }
}

impl Unpack for StringBox {
    type Inside = String;

    fn unpack(&self) -> String {
        "Hello".to_string()
    }
}

impl Pack for IntBox {
    type Inside = i32;

    fn pack(&self, value: i32) -> Result<Receipt, PackError> {
        Ok(Receipt { box_name: "IntBox", value: value.to_string() })
    }
}

impl Pack for AnotherIntBox {
    type Inside = i32;

    fn pack(&self, value: i32) -> Result<Receipt, PackError> {
        Ok(Receipt { box_name: "AnotherIntBox", value: value.to_string() })
    }
}

impl Pack for StringBox {
    type Inside = String;

    fn pack(&self, value: String) -> Result<Receipt, PackError> {
        Ok(Receipt { box_name: "StringBox", value })
    }
}

impl UnpackPair for IntIntBox {
    type First = i32;
    type Second = i32;

    fn unpack_first(&self) -> i32 {
        142
    }

    fn unpack_second(&self) -> i32 {
        242
    }
}

impl UnpackPair for IntStringBox {
    type First = i32;
    type Second = String;

    fn unpack_first(&self) -> i32 {
        142
    }

    fn unpack_second(&self) -> String {
        "242".to_string()
    }
}
