use std::sync::Arc;

use crate::{cqrs::QueryOrdersByMemberIdQueryHandler, repositories::OrderRepository};

#[derive(Clone)]
pub struct AppState<T: OrderRepository> {
    pub query_orders_handler: Arc<QueryOrdersByMemberIdQueryHandler<T>>,
}
