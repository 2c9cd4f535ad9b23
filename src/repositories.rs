use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use tokio::sync::Mutex;

use crate::domain::OrderRecord;

#[derive(Debug)]
pub struct MongoDbInitializationInfo {
    pub uri: String,
    pub database: String,
    pub collection: String
}

#[async_trait]
pub trait OrderRepository {
    async fn find_by_member_id(&self, member_id: &str) -> Result<Vec<OrderRecord>, String>;
}

#[derive(Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<Mutex<Vec<OrderRecord>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        InMemoryOrderRepository {
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn insert(&self, order: OrderRecord) {
        let mut lock = self.orders.lock().await;
        lock.push(order);
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_member_id(&self, member_id: &str) -> Result<Vec<OrderRecord>, String> {
        let mut orders_to_return = Vec::new();
        let lock = self.orders.lock().await;

        for order in lock.iter() {
            if let Ok(value) = order.get_str("memberId") {
                if value == member_id {
                    orders_to_return.push(order.clone());
                }
            }
        }

        Ok(orders_to_return)
    }
}

#[derive(Clone)]
pub struct MongoDbOrderRepository {
    order_collection: Collection<OrderRecord>
}

impl MongoDbOrderRepository {
    pub async fn new(info: &MongoDbInitializationInfo) -> Self {
        let client: Client = Client::with_uri_str(&info.uri).await.unwrap();
        let database = client.database(&info.database);

        MongoDbOrderRepository {
            order_collection: database.collection(&info.collection)
        }
    }
}

#[async_trait]
impl OrderRepository for MongoDbOrderRepository {
    async fn find_by_member_id(&self, member_id: &str) -> Result<Vec<OrderRecord>, String> {
        let mut orders_to_return = Vec::new();

        match self.order_collection.find(doc! {"memberId": member_id}).await {
            Ok(mut found_orders) => {
                loop {
                    match found_orders.try_next().await {
                        Ok(Some(order)) => orders_to_return.push(order),
                        Ok(None) => break,
                        Err(e) => return Err(format!("Failed to read Orders for member {}: {}", member_id, e))
                    }
                }

                Ok(orders_to_return)
            },
            Err(e) => Err(format!("Failed to find Orders for member {}: {}", member_id, e))
        }
    }
}
