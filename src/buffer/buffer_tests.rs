use super::CircularBuffer;
use crate::model::BufferError;

// ===== Test Helpers =====

fn filled(max: usize, values: &[&str]) -> CircularBuffer<String> {
    let mut buf = CircularBuffer::new(max);
    for v in values {
        buf.push_back(v.to_string());
    }
    buf
}

fn contents(buf: &CircularBuffer<String>) -> Vec<String> {
    buf.iter().cloned().collect()
}

// ===== Construction =====

#[test]
#[should_panic(expected = "non-zero")]
fn zero_max_len_is_rejected() {
    let _ = CircularBuffer::<u32>::new(0);
}

#[test]
fn new_buffer_is_empty() {
    let buf = CircularBuffer::<u32>::new(4);
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.max_len(), 4);
}

// ===== push_back =====

#[test]
fn push_back_grows_until_max() {
    let mut buf = CircularBuffer::new(3);
    assert!(!buf.push_back(1));
    assert!(!buf.push_back(2));
    assert!(!buf.push_back(3));
    assert_eq!(buf.len(), 3);
}

#[test]
fn push_back_returns_true_exactly_when_full_before_call() {
    let mut buf = CircularBuffer::new(2);
    assert!(!buf.push_back("a".to_string()));
    assert!(!buf.push_back("b".to_string()));
    assert!(buf.push_back("c".to_string()));
    assert!(buf.push_back("d".to_string()));
}

#[test]
fn overflow_evicts_oldest_and_keeps_insertion_order() {
    // Capacity 3; A B C D -> [B, C, D], last push reported the overwrite.
    let mut buf = filled(3, &["A", "B", "C"]);
    assert!(buf.push_back("D".to_string()));
    assert_eq!(contents(&buf), ["B", "C", "D"]);
    assert_eq!(buf.len(), 3);
}

#[test]
fn indexing_follows_insertion_order() {
    let buf = filled(5, &["a", "b", "c"]);
    assert_eq!(buf[0], "a");
    assert_eq!(buf[1], "b");
    assert_eq!(buf[2], "c");
}

#[test]
fn indexing_follows_insertion_order_after_wrap() {
    let mut buf = filled(3, &["a", "b", "c"]);
    buf.push_back("d".to_string());
    buf.push_back("e".to_string());
    assert_eq!(contents(&buf), ["c", "d", "e"]);
    assert_eq!(buf[0], "c");
    assert_eq!(buf[2], "e");
}

#[test]
fn push_after_pop_reuses_freed_slot() {
    let mut buf = filled(3, &["a", "b", "c"]);
    assert_eq!(buf.pop_front().as_deref(), Some("a"));
    let before = buf.len();
    assert!(!buf.push_back("d".to_string()));
    assert_eq!(buf.len(), before + 1);
    assert_eq!(buf[buf.len() - 1], "d");
}

#[test]
fn growth_after_pop_preserves_order() {
    // Exercises growing rotated storage: pop opens a slot mid-array, refill,
    // then grow past the old physical size.
    let mut buf = CircularBuffer::new(5);
    for v in ["a", "b", "c"] {
        buf.push_back(v.to_string());
    }
    buf.pop_front();
    buf.push_back("d".to_string());
    buf.push_back("e".to_string());
    buf.push_back("f".to_string());
    assert_eq!(contents(&buf), ["b", "c", "d", "e", "f"]);
}

// ===== pop_front =====

#[test]
fn pop_front_returns_oldest() {
    let mut buf = filled(3, &["x", "y"]);
    assert_eq!(buf.pop_front().as_deref(), Some("x"));
    assert_eq!(buf.pop_front().as_deref(), Some("y"));
    assert_eq!(buf.pop_front(), None);
}

#[test]
fn pop_front_on_empty_returns_none() {
    let mut buf = CircularBuffer::<String>::new(2);
    assert_eq!(buf.pop_front(), None);
}

#[test]
fn pop_to_empty_resets_canonical_state() {
    let mut buf = filled(2, &["x"]);
    buf.pop_front();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    // Refill works from the reset state.
    buf.push_back("y".to_string());
    assert_eq!(contents(&buf), ["y"]);
}

// ===== insert =====

#[test]
fn insert_in_middle_shifts_right() {
    let mut buf = filled(5, &["a", "b", "d"]);
    buf.insert(2, "c".to_string()).unwrap();
    assert_eq!(contents(&buf), ["a", "b", "c", "d"]);
}

#[test]
fn insert_at_len_appends() {
    let mut buf = filled(5, &["a"]);
    buf.insert(1, "b".to_string()).unwrap();
    assert_eq!(contents(&buf), ["a", "b"]);
}

#[test]
fn insert_at_capacity_evicts_oldest_first() {
    // Spec scenario: Insert(1, X) into [A, B, C] at capacity 3 evicts A,
    // then inserts at position 1 of the remaining [B, C].
    let mut buf = filled(3, &["A", "B", "C"]);
    buf.insert(1, "X".to_string()).unwrap();
    assert_eq!(contents(&buf), ["B", "X", "C"]);
}

#[test]
fn insert_into_rotated_buffer() {
    let mut buf = filled(5, &["a", "b", "c"]);
    buf.pop_front();
    buf.push_back("d".to_string());
    // Physically rotated now; logical [b, c, d].
    buf.insert(1, "x".to_string()).unwrap();
    assert_eq!(contents(&buf), ["b", "x", "c", "d"]);
}

#[test]
fn insert_past_len_fails() {
    let mut buf = filled(3, &["a"]);
    assert_eq!(
        buf.insert(2, "b".to_string()),
        Err(BufferError::IndexOutOfRange { index: 2, len: 1 })
    );
}

#[test]
fn insert_then_remove_is_identity_when_no_eviction() {
    let mut buf = filled(5, &["a", "b", "c"]);
    let before = contents(&buf);
    buf.insert(1, "x".to_string()).unwrap();
    let removed = buf.remove(1).unwrap();
    assert_eq!(removed, "x");
    assert_eq!(contents(&buf), before);
}

// ===== remove =====

#[test]
fn remove_middle_shifts_left() {
    let mut buf = filled(5, &["a", "b", "c"]);
    assert_eq!(buf.remove(1).unwrap(), "b");
    assert_eq!(contents(&buf), ["a", "c"]);
}

#[test]
fn remove_head_and_tail() {
    let mut buf = filled(5, &["a", "b", "c"]);
    assert_eq!(buf.remove(0).unwrap(), "a");
    assert_eq!(buf.remove(1).unwrap(), "c");
    assert_eq!(contents(&buf), ["b"]);
}

#[test]
fn remove_from_rotated_buffer() {
    let mut buf = filled(3, &["a", "b", "c"]);
    buf.push_back("d".to_string()); // logical [b, c, d], rotated
    assert_eq!(buf.remove(1).unwrap(), "c");
    assert_eq!(contents(&buf), ["b", "d"]);
}

#[test]
fn remove_last_element_empties_buffer() {
    let mut buf = filled(3, &["only"]);
    assert_eq!(buf.remove(0).unwrap(), "only");
    assert!(buf.is_empty());
}

#[test]
fn remove_out_of_range_fails() {
    let mut buf = filled(3, &["a"]);
    assert_eq!(
        buf.remove(1),
        Err(BufferError::IndexOutOfRange { index: 1, len: 1 })
    );
}

// ===== get / indexing =====

#[test]
fn get_checks_bounds() {
    let buf = filled(3, &["a", "b"]);
    assert_eq!(buf.get(1).map(String::as_str), Ok("b"));
    assert_eq!(
        buf.get(2).err(),
        Some(BufferError::IndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
#[should_panic(expected = "out of range")]
fn index_panics_out_of_range() {
    let buf = filled(3, &["a"]);
    let _ = &buf[1];
}

#[test]
fn get_mut_allows_in_place_edit() {
    let mut buf = filled(3, &["a", "b"]);
    buf.get_mut(0).unwrap().push('!');
    assert_eq!(buf[0], "a!");
}

// ===== clear / raise_max_len =====

#[test]
fn clear_empties_buffer() {
    let mut buf = filled(3, &["a", "b", "c"]);
    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
}

#[test]
fn raise_max_len_defers_eviction() {
    let mut buf = filled(2, &["a", "b"]);
    buf.raise_max_len(1);
    assert!(!buf.push_back("c".to_string()));
    assert_eq!(contents(&buf), ["a", "b", "c"]);
    assert!(buf.push_back("d".to_string()));
    assert_eq!(contents(&buf), ["b", "c", "d"]);
}

#[test]
fn pop_then_push_keeps_len_stable() {
    let mut buf = filled(4, &["a", "b", "c"]);
    let len = buf.len();
    buf.pop_front();
    buf.push_back("z".to_string());
    assert_eq!(buf.len(), len);
    assert_eq!(buf[buf.len() - 1], "z");
}
