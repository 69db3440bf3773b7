use std::sync::Arc;

use crate::db::Database;
use crate::order::{InMemoryOrderRepository, OrderService, PgOrderRepository};
use crate::user::{Argon2Hasher, InMemoryUserStore, PgUserStore, UserService};

/// Shared gateway state. Collaborators are wired once here, at composition time.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<OrderService>,
    pub users: Arc<UserService>,
    /// PostgreSQL pool; `None` when running on in-memory storage
    pub pg_db: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(
        orders: Arc<OrderService>,
        users: Arc<UserService>,
        pg_db: Option<Arc<Database>>,
    ) -> Self {
        Self {
            orders,
            users,
            pg_db,
        }
    }

    /// Services backed by PostgreSQL
    pub fn with_postgres(db: Arc<Database>) -> Self {
        let orders = Arc::new(PgOrderRepository::new(db.pool().clone()));
        let user_store = Arc::new(PgUserStore::new(db.pool().clone()));
        Self::new(
            Arc::new(OrderService::new(orders)),
            Arc::new(UserService::new(
                user_store.clone(),
                user_store,
                Arc::new(Argon2Hasher::new()),
            )),
            Some(db),
        )
    }

    /// Services backed by in-process maps. Nothing survives a restart.
    pub fn in_memory() -> Self {
        let user_store = Arc::new(InMemoryUserStore::new());
        Self::new(
            Arc::new(OrderService::new(Arc::new(InMemoryOrderRepository::new()))),
            Arc::new(UserService::new(
                user_store.clone(),
                user_store,
                Arc::new(Argon2Hasher::new()),
            )),
            None,
        )
    }
}
