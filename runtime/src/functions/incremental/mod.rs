mod count;
mod handler;
mod sum;
mod std_var;
mod sum2;
mod update_fn;

pub use count::*;
pub use handler::*;
pub use sum::*;
pub use std_var::*;
pub use sum2::*;
pub use update_fn::*;
