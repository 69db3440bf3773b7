//! User registration
//!
//! Flow: resolve every requested role (fail fast on the first unknown name),
//! hash the credential, then persist user + role links atomically.

use std::sync::Arc;

use super::error::UserError;
use super::hasher::CredentialHasher;
use super::models::{NewUser, Role};
use super::repository::{RoleCatalog, UserRepository};
use crate::core_types::UserId;

pub struct UserService {
    roles: Arc<dyn RoleCatalog>,
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserService {
    pub fn new(
        roles: Arc<dyn RoleCatalog>,
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
    ) -> Self {
        Self {
            roles,
            users,
            hasher,
        }
    }

    /// Register a new user with the given roles
    pub async fn register_user(
        &self,
        username: String,
        password: &str,
        role_names: &[String],
    ) -> Result<UserId, UserError> {
        let roles = self.resolve_roles(role_names).await?;
        let password_hash = self.hash_password(password).await?;

        let user = self
            .users
            .save(NewUser {
                username,
                password_hash,
                roles,
            })
            .await
            .inspect_err(|e| match e {
                UserError::Storage(_) | UserError::Hashing(_) => {
                    tracing::error!(error = %e, "Registration failed")
                }
                _ => tracing::warn!(error = %e, "Registration rejected"),
            })?;

        tracing::info!(
            user_id = user.user_id,
            username = %user.username,
            roles = user.roles.len(),
            "User registered"
        );
        Ok(user.user_id)
    }

    /// Hash on tokio's blocking pool
    async fn hash_password(&self, password: &str) -> Result<String, UserError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                UserError::Hashing(e.to_string())
            })?
    }

    /// Look up each name in the catalog, collapsing duplicates.
    async fn resolve_roles(&self, role_names: &[String]) -> Result<Vec<Role>, UserError> {
        let mut resolved: Vec<Role> = Vec::with_capacity(role_names.len());
        for name in role_names {
            if resolved.iter().any(|r| &r.name == name) {
                continue;
            }
            match self.roles.find_by_name(name).await? {
                Some(role) => resolved.push(role),
                None => {
                    tracing::warn!(role = %name, "Registration rejected: unknown role");
                    return Err(UserError::RoleNotFound(name.clone()));
                }
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::hasher::Argon2Hasher;
    use crate::user::repository::InMemoryUserStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service() -> (UserService, Arc<InMemoryUserStore>) {
        let store = Arc::new(InMemoryUserStore::new());
        let svc = UserService::new(store.clone(), store.clone(), Arc::new(Argon2Hasher::new()));
        (svc, store)
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    /// Hasher that counts calls and produces a recognisable digest
    #[derive(Default)]
    struct CountingHasher {
        calls: AtomicUsize,
    }

    impl CredentialHasher for CountingHasher {
        fn hash(&self, plaintext: &str) -> Result<String, UserError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("hashed:{}", plaintext.len()))
        }

        fn verify(&self, plaintext: &str, digest: &str) -> bool {
            digest == format!("hashed:{}", plaintext.len())
        }
    }

    #[tokio::test]
    async fn test_register_with_existing_role() {
        let (svc, store) = service();
        let id = svc
            .register_user("testuser".into(), "password123", &names(&["USER"]))
            .await
            .unwrap();

        let user = store.find_by_username("testuser").await.unwrap().unwrap();
        assert_eq!(user.user_id, id);
        assert!(user.has_role("USER"));
        assert_ne!(user.password_hash, "password123");
        assert!(Argon2Hasher::new().verify("password123", &user.password_hash));
    }

    #[tokio::test]
    async fn test_unknown_role_fails_without_persisting() {
        let (svc, store) = service();
        let err = svc
            .register_user("testuser".into(), "password123", &names(&["USER", "GHOST"]))
            .await
            .unwrap_err();

        assert_eq!(err, UserError::RoleNotFound("GHOST".into()));
        assert_eq!(err.to_string(), "role not found: GHOST");
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_role_skips_hashing() {
        let store = Arc::new(InMemoryUserStore::new());
        let hasher = Arc::new(CountingHasher::default());
        let svc = UserService::new(store.clone(), store.clone(), hasher.clone());

        let _ = svc
            .register_user("x".into(), "pw", &names(&["NOPE"]))
            .await;
        assert_eq!(hasher.calls.load(Ordering::SeqCst), 0);
    }

    /// Hasher whose worker dies mid-hash
    struct PanickingHasher;

    impl CredentialHasher for PanickingHasher {
        fn hash(&self, _plaintext: &str) -> Result<String, UserError> {
            panic!("hasher crashed");
        }

        fn verify(&self, _plaintext: &str, _digest: &str) -> bool {
            false
        }
    }

    /// Hasher that records which thread ran it
    #[derive(Default)]
    struct ThreadRecordingHasher {
        thread: std::sync::Mutex<Option<std::thread::ThreadId>>,
    }

    impl CredentialHasher for ThreadRecordingHasher {
        fn hash(&self, plaintext: &str) -> Result<String, UserError> {
            *self.thread.lock().unwrap() = Some(std::thread::current().id());
            Ok(format!("hashed:{}", plaintext.len()))
        }

        fn verify(&self, _plaintext: &str, _digest: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_hashing_runs_off_the_runtime_thread() {
        let store = Arc::new(InMemoryUserStore::new());
        let hasher = Arc::new(ThreadRecordingHasher::default());
        let svc = UserService::new(store.clone(), store.clone(), hasher.clone());

        svc.register_user("worker".into(), "pw", &names(&["USER"]))
            .await
            .unwrap();

        let recorded = *hasher.thread.lock().unwrap();
        let hashed_on = recorded.expect("hash was called");
        assert_ne!(hashed_on, std::thread::current().id());
        assert_eq!(
            store.find_by_username("worker").await.unwrap().unwrap().password_hash,
            "hashed:2"
        );
    }

    #[tokio::test]
    async fn test_crashed_hashing_task_is_an_error_not_a_panic() {
        let store = Arc::new(InMemoryUserStore::new());
        let svc = UserService::new(store.clone(), store.clone(), Arc::new(PanickingHasher));

        let err = svc
            .register_user("ghost".into(), "pw", &names(&["USER"]))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Hashing(_)));
        assert_eq!(store.user_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_role_names_collapse() {
        let (svc, store) = service();
        svc.register_user("dup".into(), "pw", &names(&["USER", "USER", "ADMIN"]))
            .await
            .unwrap();

        let user = store.find_by_username("dup").await.unwrap().unwrap();
        assert_eq!(user.roles, vec![Role::new("USER"), Role::new("ADMIN")]);
    }

    #[tokio::test]
    async fn test_no_roles_is_allowed() {
        let (svc, store) = service();
        svc.register_user("plain".into(), "pw", &[]).await.unwrap();

        let user = store.find_by_username("plain").await.unwrap().unwrap();
        assert!(user.roles.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let (svc, _) = service();
        svc.register_user("alice".into(), "pw", &names(&["USER"]))
            .await
            .unwrap();

        let err = svc
            .register_user("alice".into(), "other", &names(&["USER"]))
            .await
            .unwrap_err();
        assert_eq!(err, UserError::DuplicateUsername("alice".into()));
    }
}
