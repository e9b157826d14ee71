pub mod binary;
pub mod incremental;

mod composite;

pub use composite::*;
