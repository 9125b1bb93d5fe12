use super::*;
use std::sync::Arc;
use std::thread;

const THREAD_COUNT: usize = 8;
const OPERATIONS_PER_THREAD: usize = 1_000;

#[test]
fn test_shared_table_basic() {
    let table = SharedTable::create(10).unwrap();

    assert_eq!(table.insert("name", "John").unwrap(), Insertion::Inserted);
    assert_eq!(table.fetch("name"), Some("John".to_string()));
    assert_eq!(table.len(), 1);

    assert_eq!(table.remove("name"), Some("John".to_string()));
    assert!(table.is_empty());
}

#[test]
fn test_concurrent_insertions() {
    let table = Arc::new(SharedTable::create(1).unwrap());

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let table = table.clone();
            thread::spawn(move || {
                for i in 0..OPERATIONS_PER_THREAD {
                    let key = format!("{}-{}", thread_id, i);
                    table.insert(&key, &i.to_string()).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), THREAD_COUNT * OPERATIONS_PER_THREAD);
    assert!(table.capacity() > 1);

    let guard = table.read();
    for thread_id in 0..THREAD_COUNT {
        for i in 0..OPERATIONS_PER_THREAD {
            let key = format!("{}-{}", thread_id, i);
            assert_eq!(guard.fetch(&key), Some(i.to_string().as_str()));
        }
    }
}

#[test]
fn test_concurrent_readers_and_writers() {
    let table = Arc::new(SharedTable::create(4).unwrap());
    for i in 0..100 {
        table.insert(&format!("stable{}", i), "fixed").unwrap();
    }

    let writers: Vec<_> = (0..THREAD_COUNT / 2)
        .map(|thread_id| {
            let table = table.clone();
            thread::spawn(move || {
                for i in 0..OPERATIONS_PER_THREAD {
                    let key = format!("churn{}-{}", thread_id, i);
                    table.insert(&key, "x").unwrap();
                    table.remove(&key);
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..THREAD_COUNT / 2)
        .map(|_| {
            let table = table.clone();
            thread::spawn(move || {
                for i in 0..OPERATIONS_PER_THREAD {
                    let key = format!("stable{}", i % 100);
                    assert_eq!(table.fetch(&key), Some("fixed".to_string()));
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), 100);
}

#[test]
fn test_write_guard_batch_and_into_inner() {
    let table = SharedTable::create(2).unwrap();
    {
        let mut guard = table.write();
        guard.insert("a", "1").unwrap();
        guard.insert("b", "2").unwrap();
    }

    let inner = table.into_inner();
    assert_eq!(inner.fetch("a"), Some("1"));
    assert_eq!(inner.len(), 2);
    inner.destroy();
}
