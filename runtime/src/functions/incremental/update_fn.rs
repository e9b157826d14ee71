use std::fmt::Debug;
use std::marker::PhantomData;

use super::UnaryHandler;
use crate::types::Batch;

/// A user supplied per-slot update rule: `f(&mut state[i], values[i])`.
pub struct UpdateFn<F, I, S> {
    name: &'static str,
    func: F,
    _marker: PhantomData<fn(I) -> S>,
}

impl<F, I, S> UpdateFn<F, I, S>
where
    F: Fn(&mut S, I),
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            name,
            func,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, I, S> Clone for UpdateFn<F, I, S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            func: self.func.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, I, S> Debug for UpdateFn<F, I, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateFn").field("name", &self.name).finish()
    }
}

impl<F, I, S> UnaryHandler for UpdateFn<F, I, S>
where
    F: Fn(&mut S, I),
    I: Copy,
    S: Copy + Default + Debug,
{
    type Input = I;
    type State = S;
    type Output = S;

    fn name(&self) -> &'static str {
        self.name
    }

    fn update(&self, state: &mut [S], values: &[I]) {
        for (v, dst) in values.iter().zip(state.iter_mut()) {
            (self.func)(dst, *v);
        }
    }

    fn finalize(&self, state: &[S]) -> Batch<S> {
        state.to_vec()
    }
}
