// src/application/queries/users.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, UserId, UserRepository},
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub async fn get_user(&self, id: i64) -> ApplicationResult<UserDto> {
        let id = UserId::new(id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }

    pub async fn get_user_by_email(&self, email: &str) -> ApplicationResult<UserDto> {
        let email = EmailAddress::new(email)?;
        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }
}
