use axum::{
    Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::modules::invoice::inbound::http as invoice_http;
use crate::modules::notifier::inbound::http as notifier_http;
use crate::modules::salary::inbound::http as salary_http;
use crate::modules::timesheet::inbound::http as timesheet_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/read_timesheet", get(timesheet_http::read_timesheet))
        .route(
            "/save_or_update_timesheet",
            post(timesheet_http::save_or_update),
        )
        .route("/create_invoice", post(invoice_http::create_invoice))
        .route("/send_telegram", post(notifier_http::send_telegram))
        .route("/calculate_salary", get(salary_http::calculate_salary))
        .with_state(state)
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "Invoice Assistant API is up!" }))
}
