use serde::{Deserialize, Serialize};

use crate::domain::OrderRecord;

pub trait Response{}

#[derive(Serialize, Deserialize)]
pub struct QueryOrdersResponse {
    pub orders: Vec<OrderRecord>
}
impl Response for QueryOrdersResponse{}

impl QueryOrdersResponse {
    /// Renders the matched orders as the single string the `/orders`
    /// endpoint returns. The stringified shape is the endpoint's contract,
    /// not a JSON array.
    pub fn render(&self) -> String {
        let rendered: Vec<String> = self.orders.iter().map(|order| order.to_string()).collect();
        format!("[{}]", rendered.join(", "))
    }
}

#[derive(Serialize, Deserialize)]
pub struct ApiError {
    pub error: String
}
impl Response for ApiError{}
