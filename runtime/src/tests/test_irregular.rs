use test_case::test_case;

use crate::functions::{mean, source};
use crate::tests::utils::{new_mean, test_values_equal};
use crate::{Operator, Packet, ProcessorConfig, StreamProcessor};

fn packets() -> Vec<Packet<f32>> {
    vec![
        Packet::new(["a", "b"], vec![1.0, 2.0]),
        Packet::new(["a", "c"], vec![10.0, 20.0]),
        Packet::new(["a", "b", "c"], vec![100.0, 20.0, 200.0]),
    ]
}

fn expected() -> Vec<Vec<f32>> {
    vec![
        vec![1.0, 2.0],
        vec![(1.0 + 10.0) / 2.0, 20.0],
        vec![
            (1.0 + 10.0 + 100.0) / 3.0,
            (2.0 + 20.0) / 2.0,
            (20.0 + 200.0) / 2.0,
        ],
    ]
}

#[test]
fn irregular_stashing_by_hand() {
    let mut processor = new_mean();

    for (packet, want) in packets().iter().zip(expected()) {
        let ids = packet.keys();
        processor.reset_states(ids.len());
        processor.restore_states(&ids).unwrap();
        let v = processor.eval(&packet.values).unwrap();
        test_values_equal(&v, &want);
        processor.stash_states(&ids).unwrap();
    }
}

#[test_case(false ; "tracing disabled")]
#[test_case(true ; "tracing enabled")]
fn irregular_stashing_with_processor(trace_enabled: bool) {
    let config = ProcessorConfig {
        trace_enabled,
        ..Default::default()
    };
    let mut processor = StreamProcessor::with_config(mean(source::<f32>()), config);

    for (packet, want) in packets().iter().zip(expected()) {
        let v = processor.process_packet(packet).unwrap();
        test_values_equal(&v, &want);
    }
    assert_eq!(3, processor.packets_processed());

    let tree = processor.operator();
    assert_eq!(111.0, tree.left().store().get("a"));
    assert_eq!(3, tree.right().store().get("a"));
    assert_eq!(2, tree.right().store().get("b"));
    assert_eq!(2, tree.right().store().get("c"));
}

#[test]
fn slot_order_does_not_matter() {
    let mut processor = StreamProcessor::new(new_mean());
    processor.process(&["a", "b"], &[1.0, 2.0]).unwrap();

    let v = processor.process(&["b", "a"], &[4.0, 3.0]).unwrap();
    test_values_equal(&v, &[3.0, 2.0]);
}

#[test]
fn evicted_entity_starts_over() {
    let mut processor = StreamProcessor::new(new_mean());
    processor.process(&["a", "b"], &[10.0, 4.0]).unwrap();

    let tree = processor.operator_mut();
    assert_eq!(Some(10.0), tree.left_mut().store_mut().remove("a"));
    assert_eq!(Some(1), tree.right_mut().store_mut().remove("a"));

    let v = processor.process(&["a", "b"], &[2.0, 6.0]).unwrap();
    test_values_equal(&v, &[2.0, 5.0]);
}
