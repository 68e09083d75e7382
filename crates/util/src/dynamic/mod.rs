pub mod as_any;
pub mod dynamic_eq;
pub mod recover;
