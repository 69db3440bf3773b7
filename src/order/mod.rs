//! Orders
//!
//! An order is a product name, a unit price and a quantity. Its invoice amount
//! (`quantity × unit_price`) is derived on demand and never stored. Orders are
//! immutable once created.

pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::OrderError;
pub use models::{InvoiceView, NewOrder, Order, OrderView};
pub use repository::{InMemoryOrderRepository, OrderRepository, PgOrderRepository};
pub use service::OrderService;
