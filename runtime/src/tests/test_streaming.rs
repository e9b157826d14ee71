use test_case::test_case;

use crate::functions::{accumulate, count, divide, mean, source};
use crate::tests::utils::{new_mean, test_values_equal};
use crate::Operator;

#[test]
fn scalar_running_mean() {
    let mut m = new_mean();
    m.reset_states(1);

    test_values_equal(&m.eval(&[1.0]).unwrap(), &[1.0]);
    test_values_equal(&m.eval(&[2.0]).unwrap(), &[(1.0 + 2.0) / 2.0]);
    test_values_equal(&m.eval(&[3.0]).unwrap(), &[(1.0 + 2.0 + 3.0) / 3.0]);
}

#[test]
fn vector_slots_are_independent() {
    let mut m = new_mean();
    m.reset_states(3);

    let v = m.eval(&[1.0, 2.0, 3.0]).unwrap();
    test_values_equal(&v, &[1.0, 2.0, 3.0]);

    let v = m.eval(&[2.0, 3.0, 4.0]).unwrap();
    test_values_equal(&v, &[1.5, 2.5, 3.5]);

    let v = m.eval(&[3.0, 4.0, 5.0]).unwrap();
    test_values_equal(&v, &[2.0, 3.0, 4.0]);

    let v = m.eval(&[3.0, 4.0, 5.0]).unwrap();
    test_values_equal(&v, &[2.25, 3.25, 4.25]);
}

#[test]
fn reset_discards_in_memory_history() {
    let mut m = new_mean();
    m.reset_states(1);
    m.eval(&[10.0]).unwrap();
    m.eval(&[20.0]).unwrap();

    m.reset_states(1);
    test_values_equal(&m.eval(&[1.0]).unwrap(), &[1.0]);
}

#[test]
fn count_and_accumulate_track_mean_components() {
    let mut c = count(source::<f64>());
    let mut a = accumulate(source::<f64>());
    c.reset_states(2);
    a.reset_states(2);

    for batch in [[1.0, -1.0], [2.0, -2.0], [3.0, -3.0]] {
        c.eval(&batch).unwrap();
        a.eval(&batch).unwrap();
    }
    assert_eq!(&[3, 3], c.state());
    assert_eq!(&[6.0, -6.0], a.state());
}

#[test_case(0, 1 ; "empty tree, one value")]
#[test_case(3, 2 ; "three slots, two values")]
#[test_case(1, 0 ; "one slot, empty batch")]
fn eval_rejects_mis_sized_batch(slots: usize, len: usize) {
    let mut m = mean(source::<f64>());
    m.reset_states(slots);
    let batch = vec![1.0; len];

    let err = m.eval(&batch).unwrap_err();
    assert!(err.is_invalid_argument());
    // nothing was accumulated
    assert!(m.left().state().iter().all(|v| *v == 0.0));
    assert!(m.right().state().iter().all(|v| *v == 0));
}

#[test]
fn division_by_zero_follows_float_semantics() {
    let mut d = divide(source::<f64>(), source::<f64>());
    d.reset_states(3);
    let v = d.eval(&[0.0, 1.0, 2.0]).unwrap();
    test_values_equal(&v, &[f64::NAN, 1.0, 1.0]);

    let mut d = divide(source::<f64>(), count(source::<f64>()));
    d.reset_states(1);
    d.restore_states(&["never-seen"]).unwrap();
    // the count is incremented before dividing, so a mean is never 0/0
    test_values_equal(&d.eval(&[3.0]).unwrap(), &[3.0]);
}
