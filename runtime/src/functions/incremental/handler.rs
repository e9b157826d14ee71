use std::fmt::Debug;

use crate::types::Batch;

/// Update rule for a stateful unary operator.
///
/// `update` folds one batch of child output into the per-slot state. Slot `i`
/// of the state must only be updated from `values[i]`. Both slices have the
/// same length. `finalize` maps the updated state to the operator's output.
pub trait UnaryHandler {
    type Input: Copy;
    type State: Copy + Default + Debug;
    type Output: Copy;

    fn name(&self) -> &'static str;

    fn update(&self, state: &mut [Self::State], values: &[Self::Input]);

    fn finalize(&self, state: &[Self::State]) -> Batch<Self::Output>;
}
