use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::Float;

use super::UnaryHandler;
use crate::types::Batch;

/// Per-slot running state for [`StdVarHandler`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StdVarState<T> {
    pub count: T,
    pub avg: T,
    pub q: T,
}

impl<T: Float> StdVarState<T> {
    fn push_sample(&mut self, value: T) {
        // See `Rapid calculation methods` at https://en.wikipedia.org/wiki/Standard_deviation
        self.count = self.count + T::one();
        let avg = self.avg + (value - self.avg) / self.count;
        self.q = self.q + (value - self.avg) * (value - avg);
        self.avg = avg
    }

    /// Population variance; NaN when no sample has been seen.
    pub fn variance(&self) -> T {
        if self.count.is_zero() {
            return T::nan();
        }
        self.q / self.count
    }
}

/// Running population variance per slot.
///
/// Uses the incremental mean/q update rather than `sum2/count - avg^2`, which
/// cancels catastrophically when the mean is large relative to the spread.
/// `q` never decreases, so the result is never negative.
pub struct StdVarHandler<T>(PhantomData<fn(T)>);

impl<T> StdVarHandler<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for StdVarHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StdVarHandler<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Debug for StdVarHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StdVarHandler")
    }
}

impl<T> UnaryHandler for StdVarHandler<T>
where
    T: Float + Default + Debug,
{
    type Input = T;
    type State = StdVarState<T>;
    type Output = T;

    fn name(&self) -> &'static str {
        "stdvar"
    }

    fn update(&self, state: &mut [StdVarState<T>], values: &[T]) {
        for (v, dst) in values.iter().zip(state.iter_mut()) {
            dst.push_sample(*v);
        }
    }

    fn finalize(&self, state: &[StdVarState<T>]) -> Batch<T> {
        state.iter().map(StdVarState::variance).collect()
    }
}
