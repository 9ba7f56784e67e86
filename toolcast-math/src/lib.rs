#![doc = include_str!("../README.md")]

pub mod ops;
pub mod tools;

pub use ops::*;
pub use tools::*;
