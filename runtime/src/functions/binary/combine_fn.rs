use std::fmt::Debug;
use std::marker::PhantomData;

use super::BinaryHandler;
use crate::types::Batch;

/// A user supplied per-slot combinator: `out[i] = f(left[i], right[i])`.
pub struct CombineFn<F, L, R, O> {
    name: &'static str,
    func: F,
    _marker: PhantomData<fn(L, R) -> O>,
}

impl<F, L, R, O> CombineFn<F, L, R, O>
where
    F: Fn(L, R) -> O,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self {
            name,
            func,
            _marker: PhantomData,
        }
    }
}

impl<F: Clone, L, R, O> Clone for CombineFn<F, L, R, O> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            func: self.func.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, L, R, O> Debug for CombineFn<F, L, R, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombineFn").field("name", &self.name).finish()
    }
}

impl<F, L, R, O> BinaryHandler for CombineFn<F, L, R, O>
where
    F: Fn(L, R) -> O,
    L: Copy,
    R: Copy,
    O: Copy,
{
    type Left = L;
    type Right = R;
    type Output = O;

    fn name(&self) -> &'static str {
        self.name
    }

    fn combine(&self, left: &[L], right: &[R]) -> Batch<O> {
        left.iter()
            .zip(right.iter())
            .map(|(l, r)| (self.func)(*l, *r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_fn() {
        let handler = CombineFn::new("ratio_pct", |n: f64, d: u64| 100.0 * n / d as f64);
        assert_eq!(vec![50.0, 25.0], handler.combine(&[1.0, 1.0], &[2, 4]));
        assert_eq!("ratio_pct", handler.name());
    }
}
