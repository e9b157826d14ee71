use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{AddAssign, Mul};

use super::UnaryHandler;
use crate::types::Batch;

/// Running sum of squares per slot.
pub struct SumSquaresHandler<T>(PhantomData<fn(T)>);

impl<T> SumSquaresHandler<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for SumSquaresHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for SumSquaresHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Debug for SumSquaresHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SumSquaresHandler")
    }
}

impl<T> UnaryHandler for SumSquaresHandler<T>
where
    T: Copy + Default + Debug + AddAssign + Mul<Output = T>,
{
    type Input = T;
    type State = T;
    type Output = T;

    fn name(&self) -> &'static str {
        "sum2"
    }

    fn update(&self, state: &mut [T], values: &[T]) {
        for (v, dst) in values.iter().zip(state.iter_mut()) {
            let v_squared = *v * *v;
            *dst += v_squared;
        }
    }

    fn finalize(&self, state: &[T]) -> Batch<T> {
        state.to_vec()
    }
}
