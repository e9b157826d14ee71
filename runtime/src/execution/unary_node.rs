use tracing::trace;

use crate::execution::Operator;
use crate::functions::incremental::UnaryHandler;
use crate::types::Batch;
use crate::StateStore;

/// A node with one child and a per-slot accumulator.
///
/// Each evaluation folds the child's output into `state` using the handler's
/// update rule and returns the handler's view of the updated state.
#[derive(Debug, Clone)]
pub struct StatefulUnaryOperator<E, H: UnaryHandler> {
    input: E,
    handler: H,
    state: Vec<H::State>,
    store: StateStore<H::State>,
}

impl<E, H: UnaryHandler> StatefulUnaryOperator<E, H> {
    pub fn new(input: E, handler: H) -> Self {
        Self {
            input,
            handler,
            state: vec![],
            store: StateStore::new(),
        }
    }

    pub fn input(&self) -> &E {
        &self.input
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Live per-slot state, parallel to the current batch.
    pub fn state(&self) -> &[H::State] {
        &self.state
    }

    pub fn store(&self) -> &StateStore<H::State> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore<H::State> {
        &mut self.store
    }
}

impl<E, H> Operator for StatefulUnaryOperator<E, H>
where
    E: Operator,
    H: UnaryHandler<Input = E::Output>,
{
    type Input = E::Input;
    type Output = H::Output;

    fn name(&self) -> &'static str {
        self.handler.name()
    }

    fn slot_count(&self) -> usize {
        self.state.len()
    }

    fn accepts_slots(&self, len: usize) -> bool {
        self.state.len() == len && self.input.accepts_slots(len)
    }

    fn reset_states(&mut self, slot_count: usize) {
        trace!("{}: reset states, slots={}", self.handler.name(), slot_count);
        self.state.clear();
        self.state.resize(slot_count, H::State::default());
        self.input.reset_states(slot_count);
    }

    fn eval_unchecked(&mut self, batch: &[Self::Input]) -> Batch<Self::Output> {
        let values = self.input.eval_unchecked(batch);
        self.handler.update(&mut self.state, &values);
        self.handler.finalize(&self.state)
    }

    fn stash_unchecked(&mut self, keys: &[&str]) {
        trace!("{}: stash states, keys={}", self.handler.name(), keys.len());
        self.store.stash(keys, &self.state);
        self.input.stash_unchecked(keys);
    }

    fn restore_unchecked(&mut self, keys: &[&str]) {
        trace!("{}: restore states, keys={}", self.handler.name(), keys.len());
        self.store.restore(keys, &mut self.state);
        self.input.restore_unchecked(keys);
    }
}
