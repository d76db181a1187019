//! Graph store tests: box creation, wiring and the slot/connection invariant.
use wirebox::prelude::*;

fn two_boxes(store: &mut GraphStore) -> (BoxId, BoxId) {
    let a = store
        .create_box(OperationKind::Arithmetic, "ADD", Position::default())
        .id();
    let b = store
        .create_box(OperationKind::Logical, "AND", Position::default())
        .id();
    (a, b)
}

#[test]
fn test_ids_follow_creation_order_from_one() {
    let mut store = GraphStore::new();
    assert_eq!(store.next_id(), BoxId(1));

    let (a, b) = two_boxes(&mut store);
    let c = store
        .create_box(OperationKind::Logical, "NOT", Position::new(5.0, 7.0))
        .id();

    assert_eq!((a, b, c), (BoxId(1), BoxId(2), BoxId(3)));
    assert_eq!(store.next_id(), BoxId(4));
    let ids: Vec<BoxId> = store.boxes().iter().map(|b| b.id()).collect();
    assert_eq!(ids, vec![BoxId(1), BoxId(2), BoxId(3)]);
}

#[test]
fn test_arity_by_kind_and_operator() {
    let mut store = GraphStore::new();
    let cases = [
        (OperationKind::Logical, "NOT", 1),
        (OperationKind::Logical, "AND", 2),
        (OperationKind::Logical, "GreaterThan", 2),
        (OperationKind::Logical, "XOR", 2),
        (OperationKind::Arithmetic, "ADD", 8),
        (OperationKind::Arithmetic, "DIVIDE", 8),
        (OperationKind::Arithmetic, "NOT", 8),
    ];

    for (kind, name, arity) in cases {
        let op_box = store.create_box(kind, name, Position::default());
        assert_eq!(op_box.arity(), arity, "{} {}", kind, name);
        assert!(op_box.inputs().iter().all(InputSlot::is_empty));
        assert_eq!(op_box.output(), None);
    }
}

#[test]
fn test_unknown_operator_still_creates_box() {
    let mut store = GraphStore::new();
    let op_box = store.create_box(OperationKind::Logical, "XOR", Position::new(1.0, 2.0));

    assert_eq!(op_box.operator_name(), "XOR");
    assert_eq!(op_box.operator(), None);
    assert_eq!(op_box.position, Position::new(1.0, 2.0));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_operator_names_are_case_sensitive_and_kind_bound() {
    assert_eq!(
        Operator::resolve(OperationKind::Logical, "AND"),
        Some(Operator::And)
    );
    assert_eq!(Operator::resolve(OperationKind::Logical, "and"), None);
    assert_eq!(Operator::resolve(OperationKind::Arithmetic, "AND"), None);
    assert_eq!(
        Operator::resolve(OperationKind::Arithmetic, "MULTIPLY"),
        Some(Operator::Multiply)
    );
}

#[test]
fn test_add_connection_sets_slot_and_records_wire() {
    let mut store = GraphStore::new();
    let (a, b) = two_boxes(&mut store);

    store.add_connection(a, b, 1).expect("Wire should be accepted");

    let target = store.find_box(b).unwrap();
    assert_eq!(target.input(1), Some(&InputSlot::Box { source: a }));
    assert_eq!(target.input(0), Some(&InputSlot::Empty));
    assert_eq!(store.connections(), &[Connection::new(a, b, 1)]);
    assert_eq!(store.connection_into(b, 1), Some(&Connection::new(a, b, 1)));
    assert_eq!(store.connections_from(a).count(), 1);
    assert!(store.is_consistent());
}

#[test]
fn test_out_of_range_wire_changes_nothing() {
    let mut store = GraphStore::new();
    let (a, b) = two_boxes(&mut store);
    let before: Vec<OpBox> = store.boxes().to_vec();

    let err = store.add_connection(a, b, 2).unwrap_err();

    assert_eq!(
        err,
        WiringError::InputOutOfRange {
            box_id: b,
            index: 2,
            arity: 2
        }
    );
    assert_eq!(store.boxes(), before.as_slice());
    assert!(store.connections().is_empty());
}

#[test]
fn test_wire_into_missing_box_is_rejected() {
    let mut store = GraphStore::new();
    let (a, _) = two_boxes(&mut store);

    let err = store.add_connection(a, BoxId(42), 0).unwrap_err();
    assert_eq!(err, WiringError::BoxNotFound { box_id: BoxId(42) });

    let err = store
        .set_tag_input(BoxId(42), 0, TagRef::new("Level", "ns=2;s=Level"))
        .unwrap_err();
    assert_eq!(err, WiringError::BoxNotFound { box_id: BoxId(42) });
    assert!(store.connections().is_empty());
}

#[test]
fn test_dangling_source_is_accepted() {
    let mut store = GraphStore::new();
    let (_, b) = two_boxes(&mut store);

    store.add_connection(BoxId(99), b, 0).expect("Source is not checked");
    assert_eq!(store.find_box(b).unwrap().input(0).unwrap().source_box(), Some(BoxId(99)));
    assert!(store.is_consistent());
}

#[test]
fn test_rewiring_replaces_the_existing_wire() {
    let mut store = GraphStore::new();
    let (a, b) = two_boxes(&mut store);
    let c = store
        .create_box(OperationKind::Arithmetic, "SUBTRACT", Position::default())
        .id();

    store.add_connection(a, b, 0).unwrap();
    store.add_connection(c, b, 0).unwrap();

    assert_eq!(store.connections(), &[Connection::new(c, b, 0)]);
    assert_eq!(
        store.find_box(b).unwrap().input(0),
        Some(&InputSlot::Box { source: c })
    );
    assert!(store.is_consistent());
}

#[test]
fn test_tag_overwrites_wire_and_drops_connection() {
    let mut store = GraphStore::new();
    let (a, b) = two_boxes(&mut store);
    store.add_connection(a, b, 0).unwrap();
    store.add_connection(a, b, 1).unwrap();

    store
        .set_tag_input(b, 0, TagRef::new("Level", "ns=2;s=Level"))
        .unwrap();

    let slot = store.find_box(b).unwrap().input(0).unwrap().clone();
    assert_eq!(slot, InputSlot::Tag(TagRef::new("Level", "ns=2;s=Level")));
    assert_eq!(store.connections(), &[Connection::new(a, b, 1)]);
    assert!(store.is_consistent());
}

#[test]
fn test_wire_overwrites_tag() {
    let mut store = GraphStore::new();
    let (a, b) = two_boxes(&mut store);
    store
        .set_tag_input(b, 1, TagRef::new("Level", "ns=2;s=Level"))
        .unwrap();

    store.add_connection(a, b, 1).unwrap();

    assert_eq!(
        store.find_box(b).unwrap().input(1),
        Some(&InputSlot::Box { source: a })
    );
    assert_eq!(store.connections().len(), 1);
    assert!(store.is_consistent());
}

#[test]
fn test_self_wire_is_allowed() {
    let mut store = GraphStore::new();
    let (a, _) = two_boxes(&mut store);

    store.add_connection(a, a, 3).unwrap();
    assert_eq!(store.connections(), &[Connection::new(a, a, 3)]);
    assert!(store.is_consistent());
}
