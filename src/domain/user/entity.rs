// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    EmailAddress, PasswordHash, PersonName, Role, UserId, effective_roles,
};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    stored_roles: Vec<Role>,
    pub is_active: bool,
}

impl User {
    pub fn new(
        id: UserId,
        firstname: PersonName,
        lastname: PersonName,
        email: EmailAddress,
        password_hash: PasswordHash,
        stored_roles: Vec<Role>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            firstname,
            lastname,
            email,
            password_hash,
            stored_roles: strip_base_role(stored_roles),
            is_active,
        }
    }

    /// Deduplicated role set, always containing the base role.
    pub fn roles(&self) -> BTreeSet<Role> {
        effective_roles(&self.stored_roles)
    }

    /// Roles as persisted; the base role is never among them.
    pub fn stored_roles(&self) -> &[Role] {
        &self.stored_roles
    }

    pub fn set_roles(&mut self, roles: Vec<Role>) {
        self.stored_roles = strip_base_role(roles);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

fn strip_base_role(roles: Vec<Role>) -> Vec<Role> {
    let mut roles: Vec<Role> = roles.into_iter().filter(|r| *r != Role::User).collect();
    roles.sort_unstable();
    roles.dedup();
    roles
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub firstname: PersonName,
    pub lastname: PersonName,
    pub email: EmailAddress,
    pub password_hash: PasswordHash,
    pub roles: Vec<Role>,
    pub is_active: bool,
}

impl NewUser {
    pub fn new(
        firstname: PersonName,
        lastname: PersonName,
        email: EmailAddress,
        password_hash: PasswordHash,
        roles: Vec<Role>,
        is_active: bool,
    ) -> Self {
        Self {
            firstname,
            lastname,
            email,
            password_hash,
            roles: strip_base_role(roles),
            is_active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub firstname: Option<PersonName>,
    pub lastname: Option<PersonName>,
    pub email: Option<EmailAddress>,
    pub password_hash: Option<PasswordHash>,
    pub roles: Option<Vec<Role>>,
    pub is_active: Option<bool>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            firstname: None,
            lastname: None,
            email: None,
            password_hash: None,
            roles: None,
            is_active: None,
        }
    }

    pub fn with_firstname(mut self, firstname: PersonName) -> Self {
        self.firstname = Some(firstname);
        self
    }

    pub fn with_lastname(mut self, lastname: PersonName) -> Self {
        self.lastname = Some(lastname);
        self
    }

    pub fn with_email(mut self, email: EmailAddress) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn with_roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(strip_base_role(roles));
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}
