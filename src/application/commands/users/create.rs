// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::{EmailAddress, NewUser, PasswordHash, PersonName, Role},
};
use std::str::FromStr;

pub struct CreateUserCommand {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Opaque hash produced by the (external) registration flow; this core
    /// never sees or hashes plaintext passwords.
    pub password_hash: String,
    pub roles: Vec<String>,
    pub is_active: bool,
}

impl UserCommandService {
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<UserDto> {
        let firstname = PersonName::new(command.firstname)?;
        let lastname = PersonName::new(command.lastname)?;
        let email = EmailAddress::new(command.email)?;
        let password_hash = PasswordHash::new(command.password_hash)?;
        let roles = command
            .roles
            .iter()
            .map(|r| Role::from_str(r))
            .collect::<Result<Vec<_>, _>>()?;

        let new_user = NewUser::new(
            firstname,
            lastname,
            email,
            password_hash,
            roles,
            command.is_active,
        );

        let created = self.user_repo.insert(new_user).await?;
        tracing::info!(user_id = i64::from(created.id), email = %created.email, "user created");
        Ok(created.into())
    }
}
