extern crate ahash;

pub mod error;
pub mod hash;
