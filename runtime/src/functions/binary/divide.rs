use std::fmt::Debug;
use std::marker::PhantomData;

use num_traits::{Float, NumCast, ToPrimitive};

use super::BinaryHandler;
use crate::types::Batch;

/// Elementwise `numerator / denominator` in the numerator's float domain.
///
/// The denominator is widened to the numerator type before dividing, so an
/// integer count never truncates the ratio. Division by zero is not guarded
/// and yields `inf` or `NaN`.
pub struct DivideHandler<N, D>(PhantomData<fn(N, D)>);

impl<N, D> DivideHandler<N, D> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<N, D> Default for DivideHandler<N, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, D> Clone for DivideHandler<N, D> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<N, D> Debug for DivideHandler<N, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DivideHandler")
    }
}

impl<N, D> BinaryHandler for DivideHandler<N, D>
where
    N: Float,
    D: ToPrimitive + Copy,
{
    type Left = N;
    type Right = D;
    type Output = N;

    fn name(&self) -> &'static str {
        "divide"
    }

    fn combine(&self, left: &[N], right: &[D]) -> Batch<N> {
        left.iter()
            .zip(right.iter())
            .map(|(numerator, denominator)| *numerator / widen::<N, D>(*denominator))
            .collect()
    }
}

#[inline]
fn widen<N: Float, D: ToPrimitive>(v: D) -> N {
    // NumCast only fails when `v` is unrepresentable in N
    <N as NumCast>::from(v).unwrap_or_else(N::nan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_integer_count_does_not_truncate() {
        let handler = DivideHandler::<f32, u64>::new();
        let res = handler.combine(&[3.0, 5.0, 7.0], &[2, 2, 2]);
        assert_eq!(vec![1.5, 2.5, 3.5], res);
    }

    #[test]
    fn test_divide_by_zero_follows_float_semantics() {
        let handler = DivideHandler::<f64, u64>::new();
        let res = handler.combine(&[1.0, -1.0, 0.0], &[0, 0, 0]);
        assert_eq!(f64::INFINITY, res[0]);
        assert_eq!(f64::NEG_INFINITY, res[1]);
        assert!(res[2].is_nan());
    }

    #[test]
    fn test_divide_floats() {
        let handler = DivideHandler::<f64, f64>::new();
        assert_eq!(vec![0.25, 4.0], handler.combine(&[1.0, 8.0], &[4.0, 2.0]));
    }
}
