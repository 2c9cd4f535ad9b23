use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::{Html, IntoResponse, Response}, routing::{get, post}, Json, Router};
use serde_json::json;

use crate::{cqrs::{QueryHandler, QueryOrdersByMemberIdQuery}, dtos::ApiError, repositories::OrderRepository, state::AppState};

static INDEX_HTML: &str = include_str!("../templates/index.html");

pub fn app_router<T: OrderRepository + Send + Sync + 'static>(state: Arc<AppState<T>>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/orders", post(query_orders::<T>))
        .with_state(state)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn query_orders<T: OrderRepository + Send + Sync + 'static>(State(state): State<Arc<AppState<T>>>, Json(query): Json<QueryOrdersByMemberIdQuery>) -> Response {
    if query.member_id.is_empty() {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(json!(ApiError{error: String::from("Member ID cannot be null or empty!!!")}))).into_response();
    }

    match state.query_orders_handler.handle(&query).await {
        Ok(response) => (StatusCode::OK, response.render()).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!(ApiError{error: e}))).into_response()
    }
}
