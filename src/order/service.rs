//! Order Service - business logic for order operations
//!
//! Handlers stay thin HTTP adapters and delegate here.

use rust_decimal::Decimal;
use std::sync::Arc;

use super::error::OrderError;
use super::models::{NewOrder, Order, OrderView};
use super::repository::OrderRepository;
use crate::core_types::OrderId;

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    /// Place an order. Every call creates a new record.
    pub async fn create_order(
        &self,
        product_name: String,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<OrderId, OrderError> {
        let order = NewOrder::new(product_name, unit_price, quantity);
        let saved = self.repo.save(order).await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist order");
        })?;

        tracing::info!(
            order_id = saved.order_id,
            product_name = %saved.product_name,
            quantity = saved.quantity,
            "Order created"
        );
        Ok(saved.order_id)
    }

    pub async fn get_order(&self, order_id: OrderId) -> Result<OrderView, OrderError> {
        self.load(order_id).await.map(|o| o.to_view())
    }

    /// `quantity × unit_price` of an existing order
    pub async fn get_invoice_amount(&self, order_id: OrderId) -> Result<Decimal, OrderError> {
        let order = self.load(order_id).await?;
        order
            .calculate_amount()
            .map_err(|_| OrderError::AmountOverflow(order_id))
    }

    async fn load(&self, order_id: OrderId) -> Result<Order, OrderError> {
        match self.repo.find_by_id(order_id).await? {
            Some(order) => Ok(order),
            None => {
                tracing::warn!(order_id, "Order not found");
                Err(OrderError::NotFound(order_id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::repository::InMemoryOrderRepository;
    use async_trait::async_trait;

    fn service() -> (OrderService, Arc<InMemoryOrderRepository>) {
        let repo = Arc::new(InMemoryOrderRepository::new());
        (OrderService::new(repo.clone()), repo)
    }

    /// Storage that always fails
    struct BrokenRepository;

    #[async_trait]
    impl OrderRepository for BrokenRepository {
        async fn save(&self, _order: NewOrder) -> Result<Order, OrderError> {
            Err(OrderError::Storage("connection refused".into()))
        }

        async fn find_by_id(&self, _order_id: OrderId) -> Result<Option<Order>, OrderError> {
            Err(OrderError::Storage("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let (svc, _) = service();
        let id = svc
            .create_order("Television".into(), Decimal::new(699, 0), 10)
            .await
            .unwrap();

        let view = svc.get_order(id).await.unwrap();
        assert_eq!(view.product_name, "Television");
        assert_eq!(view.unit_price, Decimal::new(699, 0));
        assert_eq!(view.quantity, 10);
    }

    #[tokio::test]
    async fn test_invoice_amount() {
        let (svc, _) = service();
        let id = svc
            .create_order("Batavus fiets".into(), Decimal::new(1500, 0), 5)
            .await
            .unwrap();

        assert_eq!(
            svc.get_invoice_amount(id).await.unwrap(),
            Decimal::new(7500, 0)
        );
    }

    #[tokio::test]
    async fn test_zero_quantity_invoice_is_zero_not_missing() {
        let (svc, _) = service();
        let id = svc
            .create_order("Sample".into(), Decimal::new(1999, 2), 0)
            .await
            .unwrap();

        assert_eq!(svc.get_invoice_amount(id).await.unwrap(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_missing_order_is_not_found() {
        let (svc, _) = service();
        assert_eq!(svc.get_order(999).await, Err(OrderError::NotFound(999)));
        assert_eq!(
            svc.get_invoice_amount(999).await,
            Err(OrderError::NotFound(999))
        );
    }

    #[tokio::test]
    async fn test_duplicate_requests_create_new_records() {
        let (svc, repo) = service();
        let a = svc
            .create_order("Gibson gitaar".into(), Decimal::new(239900, 2), 5)
            .await
            .unwrap();
        let b = svc
            .create_order("Gibson gitaar".into(), Decimal::new(239900, 2), 5)
            .await
            .unwrap();

        assert_ne!(a, b);
        assert_eq!(repo.order_count(), 2);
    }

    #[tokio::test]
    async fn test_overflowing_amount() {
        let (svc, _) = service();
        let id = svc
            .create_order("Everything".into(), Decimal::MAX, 2)
            .await
            .unwrap();

        assert_eq!(
            svc.get_invoice_amount(id).await,
            Err(OrderError::AmountOverflow(id))
        );
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let svc = OrderService::new(Arc::new(BrokenRepository));
        assert!(matches!(
            svc.create_order("x".into(), Decimal::ONE, 1).await,
            Err(OrderError::Storage(_))
        ));
        assert!(matches!(
            svc.get_order(1).await,
            Err(OrderError::Storage(_))
        ));
    }
}
