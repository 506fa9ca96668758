// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub id: i64,
}

impl UserCommandService {
    /// Deletes the user; their posts go with them through the storage
    /// layer's cascade.
    pub async fn delete_user(&self, command: DeleteUserCommand) -> ApplicationResult<()> {
        let id = UserId::new(command.id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        self.user_repo.delete(id).await?;
        tracing::info!(user_id = i64::from(id), "user deleted");
        Ok(())
    }
}
