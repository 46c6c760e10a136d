use crate::core::errors::CrudError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserStorage for InMemoryStorage {
    async fn save(&self, user: User) -> Result<User, CrudError> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, CrudError> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, CrudError> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|u| u.created_at);
        Ok(all)
    }

    async fn exists_by_id(&self, user_id: Uuid) -> Result<bool, CrudError> {
        let users = self.users.read().await;
        Ok(users.contains_key(&user_id))
    }

    async fn delete_by_id(&self, user_id: Uuid) -> Result<(), CrudError> {
        let mut users = self.users.write().await;
        users.remove(&user_id);
        Ok(())
    }
}
