use std::marker::PhantomData;

use crate::execution::Operator;
use crate::types::Batch;

/// Identity leaf. Returns a copy of its input and holds no state.
///
/// It still tracks the slot count so a mis-sized batch is rejected before any
/// parent mutates its state.
pub struct Source<T> {
    slot_count: usize,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> Source<T> {
    pub fn new() -> Self {
        Self {
            slot_count: 0,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        Self {
            slot_count: self.slot_count,
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source")
            .field("slot_count", &self.slot_count)
            .finish()
    }
}

impl<T: Copy> Operator for Source<T> {
    type Input = T;
    type Output = T;

    fn name(&self) -> &'static str {
        "source"
    }

    fn slot_count(&self) -> usize {
        self.slot_count
    }

    fn reset_states(&mut self, slot_count: usize) {
        self.slot_count = slot_count;
    }

    fn eval_unchecked(&mut self, batch: &[T]) -> Batch<T> {
        batch.to_vec()
    }

    fn stash_unchecked(&mut self, _keys: &[&str]) {}

    fn restore_unchecked(&mut self, _keys: &[&str]) {}
}
