//! Tests for concurrent use of the type cache

use std::thread;

use tabula_cache::TypeCache;
use tabula_foundation::RecordType;

#[test]
fn concurrent_misses_commit_one_type() {
    let cache = TypeCache::new();

    let types: Vec<RecordType> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| cache.type_for(["alpha", "beta", "gamma"]).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(cache.len(), 1);
    for ty in &types[1..] {
        assert!(RecordType::ptr_eq(&types[0], ty));
    }
}

#[test]
fn concurrent_instantiate_many_key_sets() {
    let cache = TypeCache::new();

    thread::scope(|scope| {
        for t in 0..4 {
            let cache = &cache;
            scope.spawn(move || {
                for i in 0..50_i64 {
                    let key = format!("k{}", i % 10);
                    let r = cache.instantiate(&[(key.as_str(), t)]).unwrap();
                    assert_eq!(r.values().len(), 1);
                }
            });
        }
    });

    assert_eq!(cache.len(), 10);
}
