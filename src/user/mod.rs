//! Users and roles
//!
//! Registration resolves each named role against the pre-seeded catalog,
//! hashes the credential, then stores the user with its role set.

pub mod error;
pub mod hasher;
pub mod models;
pub mod repository;
pub mod service;

pub use error::UserError;
pub use hasher::{Argon2Hasher, CredentialHasher};
pub use models::{NewUser, Role, User};
pub use repository::{InMemoryUserStore, PgUserStore, RoleCatalog, UserRepository};
pub use service::UserService;
