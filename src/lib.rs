//! Order Desk - order management REST backend
//!
//! Places orders, looks them up, computes invoice amounts and registers
//! users with roles.
//!
//! # Modules
//!
//! - [`core_types`] - Identifier aliases (OrderId, UserId, RoleName)
//! - [`money`] - Exact decimal arithmetic for prices and invoice amounts
//! - [`order`] - Order model, repository and service
//! - [`user`] - User/role model, credential hashing, registration
//! - [`db`] - PostgreSQL pool and schema
//! - [`gateway`] - HTTP routes, request validation and error mapping
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod money;

// Domain
pub mod order;
pub mod user;

// Infrastructure
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use core_types::{OrderId, RoleName, UserId};
pub use money::MoneyError;
pub use order::{Order, OrderError, OrderService, OrderView};
pub use user::{Role, User, UserError, UserService};
