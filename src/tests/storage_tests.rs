use crate::core::models::user::User;
use crate::infrastructure::storage::{UserStorage, in_memory::InMemoryStorage, sqlite::SqliteStorage};
use chrono::{Duration, DurationRound, Utc};
use uuid::Uuid;

fn sample_user(username: &str, offset_secs: i64) -> User {
    // SQLite keeps timestamps as text, stay on whole microseconds
    let created_at = Utc::now()
        .duration_trunc(Duration::microseconds(1))
        .unwrap()
        + Duration::seconds(offset_secs);
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "$2b$04$hash".to_string(),
        created_at,
        updated_at: None,
    }
}

async fn sqlite_storage() -> SqliteStorage {
    SqliteStorage::connect("sqlite::memory:", 1).await.unwrap()
}

async fn exercise_store<S: UserStorage>(storage: S) {
    let alice = sample_user("alice", 0);
    let bob = sample_user("bob", 1);

    storage.save(alice.clone()).await.unwrap();
    storage.save(bob.clone()).await.unwrap();

    assert_eq!(storage.find_by_id(alice.id).await.unwrap(), Some(alice.clone()));
    assert!(storage.exists_by_id(bob.id).await.unwrap());
    assert!(!storage.exists_by_id(Uuid::new_v4()).await.unwrap());
    assert!(storage.find_by_id(Uuid::new_v4()).await.unwrap().is_none());

    let all = storage.find_all().await.unwrap();
    assert_eq!(all, vec![alice.clone(), bob.clone()]);

    // Saving an existing id replaces the record
    let mut renamed = alice.clone();
    renamed.username = "alice2".to_string();
    renamed.updated_at = Some(renamed.created_at + Duration::seconds(5));
    storage.save(renamed.clone()).await.unwrap();
    assert_eq!(storage.find_by_id(alice.id).await.unwrap(), Some(renamed));
    assert_eq!(storage.find_all().await.unwrap().len(), 2);

    storage.delete_by_id(alice.id).await.unwrap();
    assert!(!storage.exists_by_id(alice.id).await.unwrap());
    assert_eq!(storage.find_all().await.unwrap(), vec![bob]);

    // Deleting a missing id is not an error
    storage.delete_by_id(alice.id).await.unwrap();
}

#[tokio::test]
async fn test_in_memory_storage() {
    exercise_store(InMemoryStorage::new()).await;
}

#[tokio::test]
async fn test_sqlite_storage() {
    exercise_store(sqlite_storage().await).await;
}

#[tokio::test]
async fn test_sqlite_migrations_are_idempotent() {
    let storage = sqlite_storage().await;
    let user = sample_user("carol", 0);
    storage.save(user.clone()).await.unwrap();

    storage.migrate().await.unwrap();
    assert_eq!(storage.find_by_id(user.id).await.unwrap(), Some(user));
}

#[tokio::test]
async fn test_sqlite_rejects_bad_url() {
    let result = SqliteStorage::connect("postgres://localhost/users", 1).await;
    assert!(matches!(result, Err(crate::CrudError::DatabaseError(_))));
}
