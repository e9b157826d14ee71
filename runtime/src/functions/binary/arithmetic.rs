use std::fmt::Debug;
use std::marker::PhantomData;

use itertools::izip;
use num_traits::Num;

use super::BinaryHandler;
use crate::types::Batch;

/// Elementwise `left - right`.
pub struct SubtractHandler<T>(PhantomData<fn(T)>);

/// Elementwise `left * right`.
pub struct MultiplyHandler<T>(PhantomData<fn(T)>);

macro_rules! marker_handler {
    ($name: ident) => {
        impl<T> $name<T> {
            pub fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                Self::new()
            }
        }

        impl<T> Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker_handler!(SubtractHandler);
marker_handler!(MultiplyHandler);

impl<T: Num + Copy> BinaryHandler for SubtractHandler<T> {
    type Left = T;
    type Right = T;
    type Output = T;

    fn name(&self) -> &'static str {
        "subtract"
    }

    fn combine(&self, left: &[T], right: &[T]) -> Batch<T> {
        izip!(left.iter(), right.iter())
            .map(|(l, r)| *l - *r)
            .collect()
    }
}

impl<T: Num + Copy> BinaryHandler for MultiplyHandler<T> {
    type Left = T;
    type Right = T;
    type Output = T;

    fn name(&self) -> &'static str {
        "multiply"
    }

    fn combine(&self, left: &[T], right: &[T]) -> Batch<T> {
        izip!(left.iter(), right.iter())
            .map(|(l, r)| *l * *r)
            .collect()
    }
}
