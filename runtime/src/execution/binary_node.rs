use crate::execution::Operator;
use crate::functions::binary::BinaryHandler;
use crate::types::Batch;

/// A node with two children and no state of its own.
///
/// Both children see the same input batch; their outputs are combined by the
/// handler. Reset, stash and restore are forwarded left then right.
#[derive(Debug, Clone)]
pub struct StatelessBinaryOperator<L, R, H> {
    left: L,
    right: R,
    handler: H,
}

impl<L, R, H> StatelessBinaryOperator<L, R, H> {
    pub fn new(left: L, right: R, handler: H) -> Self {
        Self {
            left,
            right,
            handler,
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    /// Mutable access to a child. Resizing a child on its own leaves the tree
    /// unevaluable until `reset_states` is called on the root.
    pub fn left_mut(&mut self) -> &mut L {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut R {
        &mut self.right
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl<L, R, H> Operator for StatelessBinaryOperator<L, R, H>
where
    L: Operator,
    R: Operator<Input = L::Input>,
    H: BinaryHandler<Left = L::Output, Right = R::Output>,
{
    type Input = L::Input;
    type Output = H::Output;

    fn name(&self) -> &'static str {
        self.handler.name()
    }

    fn slot_count(&self) -> usize {
        self.left.slot_count()
    }

    fn accepts_slots(&self, len: usize) -> bool {
        self.left.accepts_slots(len) && self.right.accepts_slots(len)
    }

    fn reset_states(&mut self, slot_count: usize) {
        self.left.reset_states(slot_count);
        self.right.reset_states(slot_count);
    }

    fn eval_unchecked(&mut self, batch: &[Self::Input]) -> Batch<Self::Output> {
        let left = self.left.eval_unchecked(batch);
        let right = self.right.eval_unchecked(batch);
        self.handler.combine(&left, &right)
    }

    fn stash_unchecked(&mut self, keys: &[&str]) {
        self.left.stash_unchecked(keys);
        self.right.stash_unchecked(keys);
    }

    fn restore_unchecked(&mut self, keys: &[&str]) {
        self.left.restore_unchecked(keys);
        self.right.restore_unchecked(keys);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execution::Source;
    use crate::functions::binary::{CombineFn, SubtractHandler};
    use crate::functions::{accumulate, count};
    use crate::RuntimeError;

    #[test]
    fn test_stateless_combination_of_sources() {
        let mut op = StatelessBinaryOperator::new(
            Source::<f64>::new(),
            Source::<f64>::new(),
            SubtractHandler::<f64>::new(),
        );
        op.reset_states(2);
        assert_eq!(vec![0.0, 0.0], op.eval(&[1.0, 2.0]).unwrap());
    }

    #[test]
    fn test_children_sized_differently_are_rejected_up_front() {
        let mut left = accumulate(Source::<f64>::new());
        left.reset_states(2);
        let mut right = count(Source::<f64>::new());
        right.reset_states(1);

        let mut op = StatelessBinaryOperator::new(
            left,
            right,
            CombineFn::new("sum_per_count", |s: f64, c: u64| s / c as f64),
        );
        let err = op.eval(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, RuntimeError::ArgumentError(_)), "{err}");
        assert!(op.stash_states(&["a", "b"]).is_err());
        // nothing was evaluated
        assert_eq!(&[0.0, 0.0], op.left().state());

        op.reset_states(2);
        assert_eq!(vec![1.0, 2.0], op.eval(&[1.0, 2.0]).unwrap());
    }
}
