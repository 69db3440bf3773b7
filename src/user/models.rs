//! Data models for users and roles

use chrono::{DateTime, Utc};

use crate::core_types::{RoleName, UserId};

/// A named permission marker. Roles are pre-seeded; this crate never creates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    pub name: RoleName,
}

impl Role {
    pub fn new(name: impl Into<RoleName>) -> Self {
        Self { name: name.into() }
    }
}

/// A user about to be persisted. Roles are already resolved against the catalog.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

/// Registered user
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_role(&self, name: &str) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }
}
