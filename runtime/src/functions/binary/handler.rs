use crate::types::Batch;

/// Pure elementwise combination of the outputs of two child operators.
///
/// `left` and `right` always have the same length; the result has that length
/// too and is freshly allocated.
pub trait BinaryHandler {
    type Left: Copy;
    type Right: Copy;
    type Output: Copy;

    fn name(&self) -> &'static str;

    fn combine(&self, left: &[Self::Left], right: &[Self::Right]) -> Batch<Self::Output>;
}
