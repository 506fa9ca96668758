use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    EmailAddress, NewUser, PasswordHash, PersonName, Role, User, UserId, UserRepository,
    UserUpdate,
};
use crate::infrastructure::repositories::map_error;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    firstname: String,
    lastname: String,
    email: String,
    password_hash: String,
    roles: String,
    is_active: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let roles: Vec<Role> = serde_json::from_str(&row.roles)
            .map_err(|err| DomainError::Persistence(format!("invalid roles column: {err}")))?;
        Ok(User::new(
            UserId::new(row.id)?,
            PersonName::new(row.firstname)?,
            PersonName::new(row.lastname)?,
            EmailAddress::new(row.email)?,
            PasswordHash::new(row.password_hash)?,
            roles,
            row.is_active != 0,
        ))
    }
}

fn encode_roles(roles: &[Role]) -> DomainResult<String> {
    serde_json::to_string(roles)
        .map_err(|err| DomainError::Persistence(format!("cannot encode roles: {err}")))
}

const USER_COLUMNS: &str = "id, firstname, lastname, email, password_hash, roles, is_active";

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            firstname,
            lastname,
            email,
            password_hash,
            roles,
            is_active,
        } = new_user;

        let roles_json = encode_roles(&roles)?;
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (firstname, lastname, email, password_hash, roles, is_active) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING id, firstname, lastname, email, password_hash, roles, is_active",
        )
        .bind(firstname.as_str())
        .bind(lastname.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(roles_json)
        .bind(i64::from(is_active))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        User::try_from(row)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let UserUpdate {
            id,
            firstname,
            lastname,
            email,
            password_hash,
            roles,
            is_active,
        } = update;

        let roles_json = roles.as_deref().map(encode_roles).transpose()?;
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET \
             firstname = COALESCE(?, firstname), \
             lastname = COALESCE(?, lastname), \
             email = COALESCE(?, email), \
             password_hash = COALESCE(?, password_hash), \
             roles = COALESCE(?, roles), \
             is_active = COALESCE(?, is_active) \
             WHERE id = ? \
             RETURNING id, firstname, lastname, email, password_hash, roles, is_active",
        )
        .bind(firstname.as_ref().map(|v| v.as_str()))
        .bind(lastname.as_ref().map(|v| v.as_str()))
        .bind(email.as_ref().map(|v| v.as_str()))
        .bind(password_hash.as_ref().map(|v| v.as_str()))
        .bind(roles_json)
        .bind(is_active.map(i64::from))
        .bind(i64::from(id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(User::try_from).transpose()
    }
}
