#[macro_use]
extern crate static_assertions;

mod runtime_error;
mod state_store;

pub mod execution;
pub mod functions;
pub mod types;

#[cfg(test)]
mod tests;

pub use execution::*;
pub use runtime_error::*;
pub use state_store::*;
pub use types::*;

pub mod prelude {
    pub use crate::execution::{
        Operator, ProcessorConfig, Source, StatefulUnaryOperator, StatelessBinaryOperator,
        StreamProcessor,
    };
    pub use crate::functions::*;
    pub use crate::runtime_error::{RuntimeError, RuntimeResult};
    pub use crate::state_store::StateStore;
    pub use crate::types::{Batch, Packet};
}

// trees are plain owned values; one tree per worker, or one lock per tree
assert_impl_all!(functions::Mean<Source<f64>>: Send, Sync, Clone);
assert_impl_all!(functions::Variance<Source<f32>>: Send, Sync, Clone);
assert_impl_all!(StreamProcessor<functions::Mean<Source<f32>>>: Send, Sync);
