// src/application/commands/users/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::CreateUserCommand;
pub use delete::DeleteUserCommand;
pub use service::UserCommandService;
pub use update::UpdateUserCommand;
