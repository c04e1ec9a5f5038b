use trucker_utils::{seeded_hasher, HashSet};

#[test]
fn test_seeded_hasher_is_deterministic() {
    let a = seeded_hasher(42).hash_one("0-2:");
    let b = seeded_hasher(42).hash_one("0-2:");
    assert_eq!(a, b);
    assert_ne!(a, seeded_hasher(43).hash_one("0-2:"));
}

#[test]
fn test_seeded_hash_set() {
    let mut set: HashSet<String> = HashSet::with_hasher(seeded_hasher(1));
    assert!(set.insert("3-4:".to_string()));
    assert!(!set.insert("3-4:".to_string()));
    assert!(set.contains("3-4:"));
}
