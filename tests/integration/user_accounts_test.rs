//! User account flows on the SQLite store.

use rehabtrack::storage::{StoreError, UserDirectory};
use rehabtrack::{Profile, RecordStore, SqliteStore};
use tempfile::tempdir;

#[test]
fn test_create_and_authenticate() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rehab.db");

    let mut store = SqliteStore::open(&path).unwrap();
    let created = store
        .create_user("sam", "correct horse", Some("sam@example.com"))
        .unwrap();
    assert_eq!(created.username, "sam");
    drop(store);

    let store = SqliteStore::open(&path).unwrap();
    let user = store.authenticate("sam", "correct horse").unwrap();
    assert_eq!(user.email.as_deref(), Some("sam@example.com"));
    assert_eq!(user.created_at.timestamp(), created.created_at.timestamp());
}

#[test]
fn test_authentication_failures() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_user("sam", "correct horse", None).unwrap();

    assert!(matches!(
        store.authenticate("sam", "wrong"),
        Err(StoreError::InvalidCredentials)
    ));
    assert!(store.authenticate("alex", "correct horse").unwrap_err().is_not_found());
}

#[test]
fn test_duplicate_username_rejected() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_user("sam", "one", None).unwrap();
    assert!(matches!(
        store.create_user("sam", "two", None),
        Err(StoreError::UserExists(_))
    ));
    // first password still works
    assert!(store.authenticate("sam", "one").is_ok());
}

#[test]
fn test_list_users_includes_profiles() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.create_user("zoe", "pw", None).unwrap();
    store
        .save_profile(
            "alex",
            &Profile {
                name: "Alex".to_string(),
                ..Default::default()
            },
        )
        .unwrap();

    let users = store.list_users().unwrap();
    let names: Vec<(&str, &str)> = users
        .iter()
        .map(|u| (u.username.as_str(), u.name.as_str()))
        .collect();
    assert_eq!(names, vec![("alex", "Alex"), ("zoe", "")]);
}
