mod binary_node;
mod operator;
mod processor;
mod source;
mod unary_node;

pub use binary_node::*;
pub use operator::*;
pub use processor::*;
pub use source::*;
pub use unary_node::*;
