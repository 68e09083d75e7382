pub mod dynamic;

#[cfg(feature = "testing")]
pub mod test;
