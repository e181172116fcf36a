pub mod digest;
pub mod pad;
pub mod selftest;
