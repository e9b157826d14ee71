use num_traits::{Float, NumCast};

use crate::functions::{mean, source, Mean};
use crate::Source;

pub(crate) type MeanF32 = Mean<Source<f32>>;

pub(crate) fn new_mean() -> MeanF32 {
    mean(source())
}

/// Compares batches with a relative tolerance, treating NaN as equal to NaN.
pub(crate) fn test_values_equal<T: Float + std::fmt::Debug>(values: &[T], values_expected: &[T]) {
    assert_eq!(
        values.len(),
        values_expected.len(),
        "unexpected values.len(); got {}; want {}\nvalues=\n{:?}\nvalues_expected=\n{:?}",
        values.len(),
        values_expected.len(),
        values,
        values_expected
    );

    let epsilon = <T as NumCast>::from(1e-6).unwrap_or_else(T::epsilon);
    for (i, (val, val_expected)) in values.iter().zip(values_expected.iter()).enumerate() {
        if val.is_nan() || val_expected.is_nan() {
            assert!(
                val.is_nan() && val_expected.is_nan(),
                "unexpected value at values[{}]; got {:?}; want {:?}\nvalues=\n{:?}\nvalues_expected=\n{:?}",
                i, val, val_expected, values, values_expected
            );
            continue;
        }
        let scale = val_expected.abs().max(T::one());
        if (*val - *val_expected).abs() / scale > epsilon {
            panic!(
                "unexpected value at values[{}]; got {:?}; want {:?}\nvalues=\n{:?}\nvalues_expected=\n{:?}",
                i, val, val_expected, values, values_expected
            )
        }
    }
}
