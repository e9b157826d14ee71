use crate::types::Batch;
use crate::{RuntimeError, RuntimeResult};

/// The contract every node of an operator tree satisfies.
///
/// A node owns its children and its own per-slot state. The checked entry
/// points (`eval`, `stash_states`, `restore_states`) validate the whole tree
/// with [`accepts_slots`](Operator::accepts_slots) before any node is
/// touched, then run the infallible `*_unchecked` pass. Composite nodes call
/// the unchecked methods on their children.
pub trait Operator {
    /// Element type of the input batch.
    type Input: Copy;
    /// Element type of the output batch.
    type Output: Copy;

    fn name(&self) -> &'static str;

    /// Slot count established by the last `reset_states`. 0 for a fresh tree.
    fn slot_count(&self) -> usize;

    /// Whether this node and every descendant is sized for `len` slots.
    fn accepts_slots(&self, len: usize) -> bool {
        self.slot_count() == len
    }

    /// Sets the slot count for this node and every descendant. Stateful nodes
    /// reallocate their state with zero values; saved per-key state is kept.
    fn reset_states(&mut self, slot_count: usize);

    /// Evaluates one batch. `batch.len()` must equal the slot count.
    fn eval_unchecked(&mut self, batch: &[Self::Input]) -> Batch<Self::Output>;

    /// Saves the live state of slot `i` under `keys[i]`, own state first, then
    /// children. `keys.len()` must equal the slot count.
    fn stash_unchecked(&mut self, keys: &[&str]);

    /// Loads the live state of slot `i` from `keys[i]`, zero for unseen keys.
    /// `keys.len()` must equal the slot count.
    fn restore_unchecked(&mut self, keys: &[&str]);

    fn eval(&mut self, batch: &[Self::Input]) -> RuntimeResult<Batch<Self::Output>> {
        check_slots(&*self, batch.len(), |expected| RuntimeError::BatchLengthMismatch {
            expected,
            actual: batch.len(),
        })?;
        Ok(self.eval_unchecked(batch))
    }

    fn stash_states(&mut self, keys: &[&str]) -> RuntimeResult<()> {
        check_slots(&*self, keys.len(), |expected| {
            RuntimeError::key_count("stash_states", expected, keys.len())
        })?;
        self.stash_unchecked(keys);
        Ok(())
    }

    fn restore_states(&mut self, keys: &[&str]) -> RuntimeResult<()> {
        check_slots(&*self, keys.len(), |expected| {
            RuntimeError::key_count("restore_states", expected, keys.len())
        })?;
        self.restore_unchecked(keys);
        Ok(())
    }
}

fn check_slots<O, F>(op: &O, len: usize, mismatch: F) -> RuntimeResult<()>
where
    O: Operator + ?Sized,
    F: FnOnce(usize) -> RuntimeError,
{
    if op.accepts_slots(len) {
        return Ok(());
    }
    let expected = op.slot_count();
    if expected == len {
        // the root agrees but a descendant was sized on its own
        return Err(RuntimeError::ArgumentError(format!(
            "{}: operator tree is not uniformly sized; call reset_states on the root",
            op.name()
        )));
    }
    Err(mismatch(expected))
}
