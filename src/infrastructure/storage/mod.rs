use crate::core::errors::CrudError;
use crate::core::models::user::User;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Record store for users, keyed by id.
#[async_trait]
pub trait UserStorage: Send + Sync {
    /// Inserts the user or replaces the record with the same id.
    async fn save(&self, user: User) -> Result<User, CrudError>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, CrudError>;
    async fn find_all(&self) -> Result<Vec<User>, CrudError>;
    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, CrudError>;
    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), CrudError>;
}

// Lets the binary pick a backend at runtime behind `Arc<dyn UserStorage>`.
#[async_trait]
impl<T: UserStorage + ?Sized> UserStorage for Arc<T> {
    async fn save(&self, user: User) -> Result<User, CrudError> {
        (**self).save(user).await
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, CrudError> {
        (**self).find_by_id(user_id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, CrudError> {
        (**self).find_all().await
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, CrudError> {
        (**self).exists_by_id(user_id).await
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), CrudError> {
        (**self).delete_by_id(user_id).await
    }
}

pub mod in_memory;
pub mod sqlite;
