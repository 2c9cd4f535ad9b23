use std::sync::Arc;

use axum::{http::Method, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use cqrs::QueryOrdersByMemberIdQueryHandler;
use repositories::{MongoDbInitializationInfo, MongoDbOrderRepository};
use routes::app_router;
use state::AppState;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use dotenv::dotenv;
use std::env;

mod domain;
mod repositories;
mod dtos;
mod cqrs;
mod state;
mod routes;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let order_db_info = MongoDbInitializationInfo {
        uri: String::from(env::var("MONGODB_URI").unwrap()),
        database: String::from(env::var("MONGODB_DB").unwrap()),
        collection: String::from(env::var("MONGODB_ORDER_COLLECTION").unwrap())
    };

    let order_repository = Arc::new(MongoDbOrderRepository::new(&order_db_info).await);
    let query_orders_handler = Arc::new(QueryOrdersByMemberIdQueryHandler::new(order_repository));

    let state = Arc::new(AppState {
        query_orders_handler: query_orders_handler,
    });

    tracing_subscriber::
    fmt()
    .with_max_level(tracing::Level::DEBUG)
    .with_target(false)
    .with_ansi(false)
    .json()
    .with_file(true)
    .with_line_number(true)
    .with_current_span(true)
    .init();

    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", env::var("AXUM_PORT").unwrap())).await.unwrap();

    axum::serve(listener, app_router(state)
        .route("/metrics", get(|| async move {metrics_handle.render()}))

        .layer(prometheus_layer)
        .layer(
            ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::very_permissive().allow_methods([Method::GET, Method::POST]))
        )).await.unwrap();
}
