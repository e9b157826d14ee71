use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::AddAssign;

use super::UnaryHandler;
use crate::types::Batch;

/// Running sum per slot.
pub struct AccumulateHandler<T>(PhantomData<fn(T)>);

impl<T> AccumulateHandler<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for AccumulateHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AccumulateHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Debug for AccumulateHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccumulateHandler")
    }
}

impl<T> UnaryHandler for AccumulateHandler<T>
where
    T: Copy + Default + Debug + AddAssign,
{
    type Input = T;
    type State = T;
    type Output = T;

    fn name(&self) -> &'static str {
        "accumulate"
    }

    fn update(&self, state: &mut [T], values: &[T]) {
        for (v, dst) in values.iter().zip(state.iter_mut()) {
            *dst += *v;
        }
    }

    fn finalize(&self, state: &[T]) -> Batch<T> {
        state.to_vec()
    }
}
