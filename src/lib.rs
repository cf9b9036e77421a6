pub mod conf;
pub mod core;
pub mod sample;
pub mod table;

#[cfg(feature = "testutil")]
pub mod testutil;
