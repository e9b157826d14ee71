use std::marker::PhantomData;

use super::UnaryHandler;
use crate::types::Batch;

/// Counts arrivals per slot. The child value is ignored.
pub struct CountHandler<T>(PhantomData<fn(T)>);

impl<T> CountHandler<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for CountHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CountHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for CountHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CountHandler")
    }
}

impl<T: Copy> UnaryHandler for CountHandler<T> {
    type Input = T;
    type State = u64;
    type Output = u64;

    fn name(&self) -> &'static str {
        "count"
    }

    fn update(&self, state: &mut [u64], values: &[T]) {
        for (_, dst) in values.iter().zip(state.iter_mut()) {
            *dst += 1;
        }
    }

    fn finalize(&self, state: &[u64]) -> Batch<u64> {
        state.to_vec()
    }
}
