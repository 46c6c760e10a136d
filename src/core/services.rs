use crate::constants::{CANONICAL_ID_LENGTH, PASSWORD_MAX_BYTES};
use crate::core::errors::CrudError;
use crate::core::models::user::User;
use crate::infrastructure::storage::UserStorage;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct UserService<S: UserStorage> {
    storage: S,
    password_cost: u32,
}

impl<S: UserStorage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService {
            storage,
            password_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Overrides the bcrypt work factor used for new password hashes.
    pub fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    /// Accepts only the hyphenated 8-4-4-4-12 form.
    fn parse_user_id(user_id: &str) -> Result<Uuid, CrudError> {
        if user_id.len() != CANONICAL_ID_LENGTH {
            return Err(CrudError::InvalidUserId(user_id.to_string()));
        }
        Uuid::parse_str(user_id).map_err(|_| CrudError::InvalidUserId(user_id.to_string()))
    }

    fn hash_password(&self, password: &str) -> Result<String, CrudError> {
        if password.len() > PASSWORD_MAX_BYTES {
            return Err(CrudError::invalid_input(
                "password",
                "Password Too Long",
                format!("Password cannot exceed {} bytes", PASSWORD_MAX_BYTES),
            ));
        }
        bcrypt::hash(password, self.password_cost)
            .map_err(|e| CrudError::InternalServerError(format!("Password hashing error: {}", e)))
    }

    pub async fn create_user(&self, username: String, email: String, password: String) -> Result<Uuid, CrudError> {
        let user = User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash: self.hash_password(&password)?,
            created_at: Utc::now(),
            updated_at: None,
        };
        let saved = self.storage.save(user).await?;

        info!(user_id = %saved.id, "user created");
        Ok(saved.id)
    }

    pub async fn get_users(&self) -> Result<Vec<User>, CrudError> {
        self.storage.find_all().await
    }

    pub async fn get_user_by_id(&self, user_id: &str) -> Result<Option<User>, CrudError> {
        let id = Self::parse_user_id(user_id)?;
        self.storage.find_by_id(id).await
    }

    /// Overwrites the supplied fields of an existing user.
    ///
    /// Returns `false` without writing when no user has this id.
    pub async fn update_user_by_id(
        &self,
        user_id: &str,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<bool, CrudError> {
        let id = Self::parse_user_id(user_id)?;

        let Some(mut user) = self.storage.find_by_id(id).await? else {
            debug!(user_id = %id, "update skipped, user does not exist");
            return Ok(false);
        };

        if let Some(username) = username {
            user.username = username;
        }
        if let Some(password) = password {
            user.password_hash = self.hash_password(&password)?;
        }
        self.storage.save(user).await?;

        info!(user_id = %id, "user updated");
        Ok(true)
    }

    /// Deletes the user when present. Returns `false` without writing otherwise.
    pub async fn delete_by_id(&self, user_id: &str) -> Result<bool, CrudError> {
        let id = Self::parse_user_id(user_id)?;

        if !self.storage.exists_by_id(id).await? {
            debug!(user_id = %id, "delete skipped, user does not exist");
            return Ok(false);
        }
        self.storage.delete_by_id(id).await?;

        info!(user_id = %id, "user deleted");
        Ok(true)
    }
}
