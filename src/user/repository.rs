//! User and role storage
//!
//! `RoleCatalog` resolves role names; `UserRepository` persists a user together
//! with its role links as one atomic unit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::{DashMap, DashSet, mapref::entry::Entry};
use sqlx::{PgPool, Row};
use std::sync::atomic::{AtomicI64, Ordering};

use super::error::UserError;
use super::models::{NewUser, Role, User};
use crate::core_types::UserId;
use crate::db::{pg_codes, pg_error_code, schema::SEED_ROLES};

#[async_trait]
pub trait RoleCatalog: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, UserError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert the user and all its role links, or nothing at all.
    ///
    /// A role missing at write time yields `RoleNotFound`; a taken username
    /// yields `DuplicateUsername`.
    async fn save(&self, user: NewUser) -> Result<User, UserError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError>;
}

// ============================================================================
// PostgreSQL
// ============================================================================

/// PostgreSQL-backed users and roles (`users`, `roles`, `user_roles`)
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleCatalog for PgUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, UserError> {
        let row = sqlx::query_scalar::<_, String>("SELECT role_name FROM roles WHERE role_name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Role::new))
    }
}

#[async_trait]
impl UserRepository for PgUserStore {
    async fn save(&self, user: NewUser) -> Result<User, UserError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING user_id, created_at
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match pg_error_code(&e).as_deref() {
            Some(pg_codes::UNIQUE_VIOLATION) => UserError::DuplicateUsername(user.username.clone()),
            _ => UserError::from(e),
        })?;

        let user_id: UserId = row.get("user_id");
        let created_at: DateTime<Utc> = row.get("created_at");

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_name) VALUES ($1, $2)")
                .bind(user_id)
                .bind(&role.name)
                .execute(&mut *tx)
                .await
                .map_err(|e| match pg_error_code(&e).as_deref() {
                    Some(pg_codes::FOREIGN_KEY_VIOLATION) => {
                        UserError::RoleNotFound(role.name.clone())
                    }
                    _ => UserError::from(e),
                })?;
        }

        // Dropping `tx` on any early return above rolls the user row back
        tx.commit().await?;

        Ok(User {
            user_id,
            username: user.username,
            password_hash: user.password_hash,
            roles: user.roles,
            created_at,
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let Some(row) = sqlx::query(
            r#"SELECT user_id, username, password_hash, created_at
               FROM users WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        else {
            return Ok(None);
        };

        let user_id: UserId = row.get("user_id");
        let roles = sqlx::query_scalar::<_, String>(
            "SELECT role_name FROM user_roles WHERE user_id = $1 ORDER BY role_name",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(User {
            user_id,
            username: row.get("username"),
            password_hash: row.get("password_hash"),
            roles: roles.into_iter().map(Role::new).collect(),
            created_at: row.get("created_at"),
        }))
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// In-process users and roles, used when no PostgreSQL URL is configured and in tests
pub struct InMemoryUserStore {
    roles: DashSet<String>,
    users: DashMap<String, User>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    /// Empty user table, role catalog seeded with the default roles
    pub fn new() -> Self {
        Self::with_roles(SEED_ROLES.iter().copied())
    }

    pub fn with_roles<'a>(roles: impl IntoIterator<Item = &'a str>) -> Self {
        let set = DashSet::new();
        for r in roles {
            set.insert(r.to_string());
        }
        Self {
            roles: set,
            users: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleCatalog for InMemoryUserStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Role>, UserError> {
        Ok(self.roles.contains(name).then(|| Role::new(name)))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, user: NewUser) -> Result<User, UserError> {
        if let Some(missing) = user.roles.iter().find(|r| !self.roles.contains(&r.name)) {
            return Err(UserError::RoleNotFound(missing.name.clone()));
        }

        match self.users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(UserError::DuplicateUsername(user.username)),
            Entry::Vacant(slot) => {
                let stored = User {
                    user_id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    username: user.username,
                    password_hash: user.password_hash,
                    roles: user.roles,
                    created_at: Utc::now(),
                };
                slot.insert(stored.clone());
                Ok(stored)
            }
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.get(username).map(|u| u.value().clone()))
    }
}
