use std::sync::Arc;

use structfs_path_index::PathIndex;
use tokio::sync::RwLock;

#[tokio::test]
async fn readers_see_completed_writes() {
    let index = Arc::new(RwLock::new(PathIndex::new()));

    {
        let mut writer = index.write().await;
        writer.put("/svc/a", 1u32);
        writer.put("/svc/b", 2u32);
    }

    let mut readers = Vec::new();
    for name in ["/svc/a", "/svc/b", "/svc/c"] {
        let index = Arc::clone(&index);
        readers.push(tokio::spawn(async move {
            let guard = index.read().await;
            guard
                .get(name)
                .or_else(|| guard.longest_prefix(name))
                .map(|e| e.full_name().to_string())
        }));
    }

    let mut results = Vec::new();
    for reader in readers {
        results.push(reader.await.unwrap());
    }

    assert_eq!(
        results,
        vec![
            Some("/svc/a".to_string()),
            Some("/svc/b".to_string()),
            Some("/svc".to_string()),
        ]
    );
}

#[tokio::test]
async fn writes_are_serialized() {
    let index = Arc::new(RwLock::new(PathIndex::new()));

    let mut writers = Vec::new();
    for i in 0..8u32 {
        let index = Arc::clone(&index);
        writers.push(tokio::spawn(async move {
            index.write().await.put(&format!("/jobs/{i}"), i);
        }));
    }
    for writer in writers {
        writer.await.unwrap();
    }

    let guard = index.read().await;
    assert_eq!(guard.read_dir("/jobs").unwrap().len(), 8);
    for i in 0..8u32 {
        let path = format!("/jobs/{i}");
        assert_eq!(guard.get(&path).and_then(|e| e.value()), Some(&i));
    }
}
