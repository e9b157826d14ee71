mod arithmetic;
mod combine_fn;
mod divide;
mod handler;

pub use arithmetic::*;
pub use combine_fn::*;
pub use divide::*;
pub use handler::*;
