//! Concrete operators and the compositions built from them.
//!
//! Compositions that read the same input in several branches clone the input
//! subtree once per branch, so every node keeps exactly one owner.
use std::fmt::Debug;
use std::ops::{AddAssign, Mul};

use num_traits::{Float, Num, ToPrimitive};

use crate::execution::{Operator, Source, StatefulUnaryOperator, StatelessBinaryOperator};
use crate::functions::binary::{CombineFn, DivideHandler, MultiplyHandler, SubtractHandler};
use crate::functions::incremental::{
    AccumulateHandler, CountHandler, StdVarHandler, SumSquaresHandler, UpdateFn,
};

pub type Count<E> = StatefulUnaryOperator<E, CountHandler<<E as Operator>::Output>>;
pub type Accumulate<E> = StatefulUnaryOperator<E, AccumulateHandler<<E as Operator>::Output>>;
pub type SumSquares<E> = StatefulUnaryOperator<E, SumSquaresHandler<<E as Operator>::Output>>;

pub type Divide<N, D> = StatelessBinaryOperator<
    N,
    D,
    DivideHandler<<N as Operator>::Output, <D as Operator>::Output>,
>;
pub type Subtract<L, R> = StatelessBinaryOperator<L, R, SubtractHandler<<L as Operator>::Output>>;
pub type Multiply<L, R> = StatelessBinaryOperator<L, R, MultiplyHandler<<L as Operator>::Output>>;

/// Running mean: `Divide(Accumulate(e), Count(e))`.
pub type Mean<E> = Divide<Accumulate<E>, Count<E>>;

/// Running population variance. Not composed as `sum2 / count - mean * mean`:
/// that difference loses most of its precision when the mean is large
/// relative to the spread, and can even go negative.
pub type Variance<E> = StatefulUnaryOperator<E, StdVarHandler<<E as Operator>::Output>>;

pub fn source<T: Copy>() -> Source<T> {
    Source::new()
}

pub fn count<E: Operator>(input: E) -> Count<E> {
    StatefulUnaryOperator::new(input, CountHandler::new())
}

pub fn accumulate<E>(input: E) -> Accumulate<E>
where
    E: Operator,
    E::Output: Default + Debug + AddAssign,
{
    StatefulUnaryOperator::new(input, AccumulateHandler::new())
}

pub fn sum_squares<E>(input: E) -> SumSquares<E>
where
    E: Operator,
    E::Output: Default + Debug + AddAssign + Mul<Output = E::Output>,
{
    StatefulUnaryOperator::new(input, SumSquaresHandler::new())
}

pub fn divide<N, D>(numerator: N, denominator: D) -> Divide<N, D>
where
    N: Operator,
    D: Operator<Input = N::Input>,
    N::Output: Float,
    D::Output: ToPrimitive,
{
    StatelessBinaryOperator::new(numerator, denominator, DivideHandler::new())
}

pub fn subtract<L, R>(left: L, right: R) -> Subtract<L, R>
where
    L: Operator,
    R: Operator<Input = L::Input, Output = L::Output>,
    L::Output: Num,
{
    StatelessBinaryOperator::new(left, right, SubtractHandler::new())
}

pub fn multiply<L, R>(left: L, right: R) -> Multiply<L, R>
where
    L: Operator,
    R: Operator<Input = L::Input, Output = L::Output>,
    L::Output: Num,
{
    StatelessBinaryOperator::new(left, right, MultiplyHandler::new())
}

pub fn mean<E>(input: E) -> Mean<E>
where
    E: Operator + Clone,
    E::Output: Float + Default + Debug + AddAssign,
{
    divide(accumulate(input.clone()), count(input))
}

pub fn variance<E>(input: E) -> Variance<E>
where
    E: Operator,
    E::Output: Float + Default + Debug,
{
    StatefulUnaryOperator::new(input, StdVarHandler::new())
}

/// Stateful operator with a caller supplied per-slot update rule. The output
/// of each evaluation is the updated state.
pub fn unary_fn<E, F, S>(
    input: E,
    name: &'static str,
    func: F,
) -> StatefulUnaryOperator<E, UpdateFn<F, E::Output, S>>
where
    E: Operator,
    F: Fn(&mut S, E::Output),
    S: Copy + Default + Debug,
{
    StatefulUnaryOperator::new(input, UpdateFn::new(name, func))
}

/// Stateless operator combining two children slot by slot with `func`.
pub fn binary_fn<L, R, F, O>(
    left: L,
    right: R,
    name: &'static str,
    func: F,
) -> StatelessBinaryOperator<L, R, CombineFn<F, L::Output, R::Output, O>>
where
    L: Operator,
    R: Operator<Input = L::Input>,
    F: Fn(L::Output, R::Output) -> O,
    O: Copy,
{
    StatelessBinaryOperator::new(left, right, CombineFn::new(name, func))
}
