//! FileStore behaviour across process restarts.

use portalgate::backend::{FileStore, KeyValueStore};

#[test]
fn file_store_values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = FileStore::open(dir.path()).unwrap();
        store.set("users", "[1,2,3]").unwrap();
        store.set("session", "{}").unwrap();
    }

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get("users").unwrap().as_deref(), Some("[1,2,3]"));
    assert_eq!(reopened.get("session").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_store_remove_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.set("session", "{}").unwrap();
    store.remove("session").unwrap();
    drop(store);

    let reopened = FileStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get("session").unwrap(), None);
}

#[test]
fn file_store_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = FileStore::open(&nested).unwrap();
    store.set("users", "[]").unwrap();
    assert!(nested.join("users.json").exists());
}

#[test]
fn overwrite_leaves_no_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    for i in 0..5 {
        store.set("users", &format!("[{i}]")).unwrap();
    }
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries, vec!["users.json".to_string()]);
    assert_eq!(store.get("users").unwrap().as_deref(), Some("[4]"));
}
