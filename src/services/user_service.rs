use std::sync::Arc;

use uuid::Uuid;

use super::ServiceError;
use crate::models::{CreateUserRequest, User};
use crate::store::Store;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, ServiceError> {
        let username = request.username().ok_or(ServiceError::InvalidUsername)?;
        let user = self.store.create_user(username).await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.store.list_users().await?)
    }

    /// Resolves a path identifier to a stored user. Identifiers that are not
    /// UUIDs cannot name a user and are reported the same way as unknown ones.
    pub async fn get_user(&self, raw_id: &str) -> Result<User, ServiceError> {
        let id = Uuid::parse_str(raw_id).map_err(|_| ServiceError::InvalidUser)?;
        self.store.find_user(id).await?.ok_or(ServiceError::InvalidUser)
    }
}
