//! 用户业务服务

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use super::model::{truthy, CreateUserRequest, UpdateUserRequest, User};
use crate::core::error::CoreError;
use crate::core::validation::is_valid_user_id;
use crate::infrastructure::store::UserStore;

#[derive(Clone)]
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Result<Vec<User>, CoreError> {
        self.store.values()
    }

    pub fn get_user(&self, id: &str) -> Result<User, CoreError> {
        ensure_valid_id(id)?;
        self.store.get(id)?.ok_or(CoreError::NotFound)
    }

    pub fn create_user(&self, payload: CreateUserRequest) -> Result<User, CoreError> {
        let (Some(username), Some(age)) = (truthy(payload.username), truthy(payload.age)) else {
            return Err(CoreError::MissingFields);
        };

        let user = User {
            id: Uuid::new_v4().to_string(),
            username,
            age,
            hobbies: payload.hobbies.unwrap_or_default(),
        };
        self.store.set(user.id.clone(), user.clone())?;

        info!("已创建用户 {}", user.id);
        Ok(user)
    }

    pub fn update_user(&self, id: &str, payload: UpdateUserRequest) -> Result<User, CoreError> {
        ensure_valid_id(id)?;
        let user = self
            .store
            .update_with(id, |user| user.merge(payload))?
            .ok_or(CoreError::NotFound)?;

        debug!("已更新用户 {}", id);
        Ok(user)
    }

    pub fn delete_user(&self, id: &str) -> Result<(), CoreError> {
        ensure_valid_id(id)?;
        self.store.delete(id)?.ok_or(CoreError::NotFound)?;

        info!("已删除用户 {}", id);
        Ok(())
    }
}

fn ensure_valid_id(id: &str) -> Result<(), CoreError> {
    if is_valid_user_id(id) {
        Ok(())
    } else {
        Err(CoreError::InvalidIdentifier)
    }
}
