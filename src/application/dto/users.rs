use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Outward-facing user shape. Password material is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    /// Effective role set, base role included.
    pub roles: Vec<String>,
    pub is_active: bool,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        let roles = user.roles().iter().map(|r| r.as_str().to_owned()).collect();
        Self {
            id: user.id.into(),
            firstname: user.firstname.into(),
            lastname: user.lastname.into(),
            email: user.email.into(),
            roles,
            is_active: user.is_active,
        }
    }
}
