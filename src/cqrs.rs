use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::{dtos::{QueryOrdersResponse, Response}, repositories::OrderRepository};

// traits
pub trait Query{}

#[async_trait]
pub trait QueryHandler<Q: Query, R: Response>{
    async fn handle(&self, input: &Q) -> Result<R, String>;
}

#[derive(Serialize, Deserialize)]
pub struct QueryOrdersByMemberIdQuery {
    pub member_id: String
}
impl Query for QueryOrdersByMemberIdQuery{}

pub struct QueryOrdersByMemberIdQueryHandler<T: OrderRepository> {
    order_repository: Arc<T>
}

impl<T: OrderRepository> QueryOrdersByMemberIdQueryHandler<T> {
    pub fn new(order_repository: Arc<T>) -> Self {
        QueryOrdersByMemberIdQueryHandler {
            order_repository: order_repository
        }
    }
}

#[async_trait]
impl<T: OrderRepository + Send + Sync> QueryHandler<QueryOrdersByMemberIdQuery, QueryOrdersResponse> for QueryOrdersByMemberIdQueryHandler<T> {
    async fn handle(&self, input: &QueryOrdersByMemberIdQuery) -> Result<QueryOrdersResponse, String> {
        match self.order_repository.find_by_member_id(input.member_id.as_str()).await {
            Ok(orders) => {
                Ok(QueryOrdersResponse {
                    orders: orders
                })
            },
            Err(e) => {
                event!(Level::WARN, "Error occurred while querying orders: {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mongodb::bson::doc;

    use crate::repositories::InMemoryOrderRepository;

    use super::{QueryHandler, QueryOrdersByMemberIdQuery, QueryOrdersByMemberIdQueryHandler};

    async fn seeded_repository() -> Arc<InMemoryOrderRepository> {
        let repository = Arc::new(InMemoryOrderRepository::new());
        repository.insert(doc! {"memberId": "A", "orderId": "1"}).await;
        repository.insert(doc! {"memberId": "A", "orderId": "2"}).await;
        repository.insert(doc! {"memberId": "B", "orderId": "3"}).await;
        repository
    }

    #[tokio::test]
    async fn handle_returns_orders_for_the_requested_member() {
        let handler = QueryOrdersByMemberIdQueryHandler::new(seeded_repository().await);

        let response = handler.handle(&QueryOrdersByMemberIdQuery {
            member_id: String::from("A")
        }).await.unwrap();

        assert_eq!(response.orders.len(), 2);
        assert!(response.orders.iter().all(|order| order.get_str("memberId").unwrap() == "A"));
    }

    #[tokio::test]
    async fn handle_excludes_other_members_orders() {
        let handler = QueryOrdersByMemberIdQueryHandler::new(seeded_repository().await);

        let response = handler.handle(&QueryOrdersByMemberIdQuery {
            member_id: String::from("A")
        }).await.unwrap();

        assert!(response.orders.iter().all(|order| order.get_str("orderId").unwrap() != "3"));
    }

    #[tokio::test]
    async fn handle_with_unknown_member_returns_empty_set() {
        let handler = QueryOrdersByMemberIdQueryHandler::new(seeded_repository().await);

        let response = handler.handle(&QueryOrdersByMemberIdQuery {
            member_id: String::from("C")
        }).await.unwrap();

        assert!(response.orders.is_empty());
    }
}
