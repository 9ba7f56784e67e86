#![doc = include_str!("../README.md")]

pub mod report;
pub mod tools;

pub use report::*;
pub use tools::*;
