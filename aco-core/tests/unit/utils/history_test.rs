use super::*;

#[test]
fn can_append_items_in_order() {
    let mut history = History::new(3);

    assert!(history.is_empty());
    assert!(history.push(1));
    assert!(history.push(2));

    assert_eq!(history.len(), 2);
    assert_eq!(history.last(), Some(&2));
    assert_eq!(history.get(0), Some(&1));
    assert_eq!(history.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn can_refuse_items_when_full() {
    let mut history = History::new(2);

    assert!(history.push("a"));
    assert!(history.push("b"));
    assert!(history.is_full());
    assert!(!history.push("c"));

    assert_eq!(history.as_slice(), &["a", "b"]);
    assert_eq!(history.len(), 2);
}

#[test]
fn can_have_zero_capacity() {
    let mut history = History::new(0);

    assert!(!history.push(1.));
    assert!(history.is_empty());
}
