// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, PasswordHash, PersonName, Role, UserId, UserUpdate},
};
use std::str::FromStr;

pub struct UpdateUserCommand {
    pub id: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub roles: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl UserCommandService {
    pub async fn update_user(&self, command: UpdateUserCommand) -> ApplicationResult<UserDto> {
        let id = UserId::new(command.id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(id);

        if let Some(firstname) = command.firstname {
            update = update.with_firstname(PersonName::new(firstname)?);
        }
        if let Some(lastname) = command.lastname {
            update = update.with_lastname(PersonName::new(lastname)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(EmailAddress::new(email)?);
        }
        if let Some(password_hash) = command.password_hash {
            update = update.with_password_hash(PasswordHash::new(password_hash)?);
        }
        if let Some(roles) = command.roles {
            let roles = roles
                .iter()
                .map(|r| Role::from_str(r))
                .collect::<Result<Vec<_>, _>>()?;
            update = update.with_roles(roles);
        }
        if let Some(is_active) = command.is_active {
            update = update.with_is_active(is_active);
        }

        let updated = self.user_repo.update(update).await?;
        tracing::info!(user_id = i64::from(updated.id), "user updated");
        Ok(updated.into())
    }
}
