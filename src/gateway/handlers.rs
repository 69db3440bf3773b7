//! HTTP handlers
//!
//! Thin adapters: extract, call a service, map the result.

pub mod health;
pub mod order;
pub mod user;

pub use health::{HealthResponse, health_check};
pub use order::{create_order, get_invoice, get_order};
pub use user::{RegisterUserResponse, register_user};
