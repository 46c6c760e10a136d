mod storage_tests;

use crate::core::errors::CrudError;
use crate::core::models::user::User;
use crate::core::services::UserService;
use crate::infrastructure::storage::{UserStorage, in_memory::InMemoryStorage};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

// Lowest cost bcrypt accepts, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_service() -> UserService<InMemoryStorage> {
    let storage = InMemoryStorage::new();
    UserService::new(storage).with_password_cost(TEST_BCRYPT_COST)
}

/// In-memory store that counts write calls.
#[derive(Default)]
pub struct RecordingStorage {
    inner: InMemoryStorage,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl RecordingStorage {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStorage for RecordingStorage {
    async fn save(&self, user: User) -> Result<User, CrudError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(user).await
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, CrudError> {
        self.inner.find_by_id(user_id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, CrudError> {
        self.inner.find_all().await
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, CrudError> {
        self.inner.exists_by_id(user_id).await
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), CrudError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_by_id(user_id).await
    }
}

pub fn create_recording_service() -> (
    UserService<Arc<RecordingStorage>>,
    Arc<RecordingStorage>,
) {
    let storage = Arc::new(RecordingStorage::default());
    let service = UserService::new(Arc::clone(&storage)).with_password_cost(TEST_BCRYPT_COST);
    (service, storage)
}
