// tests/seen_set.rs
use so2slack::SeenSet;

#[test]
fn never_exceeds_twenty_entries() {
    let mut s = SeenSet::new();
    assert_eq!(s.capacity(), 20);
    for id in 1..=20u64 {
        assert_eq!(s.insert(id), None);
    }
    assert_eq!(s.len(), 20);

    // 21st evicts the oldest
    assert_eq!(s.insert(21), Some(1));
    assert_eq!(s.len(), 20);
    assert!(!s.contains(1));
    assert!(s.contains(2));
    assert!(s.contains(21));
}

#[test]
fn ids_remembered_until_twenty_newer_arrive() {
    let mut s = SeenSet::new();
    s.insert(100);
    for id in 0..19u64 {
        s.insert(id);
    }
    assert!(s.contains(100), "19 newer ids must not evict it");
    s.insert(19);
    assert!(!s.contains(100));
}
