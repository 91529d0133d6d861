//! Print receipt handler.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::dispatch::DispatchOutcome;
use crate::error::ReciboError;
use crate::order::Order;
use crate::receipt;

use super::state::AppState;

/// Handle `POST /print-receipt`.
///
/// The body is `{ "data": <order> }`. A missing or null `data` is a 400
/// with a fixed message; everything that fails after that (malformed
/// order, storage, relay) is a uniform 500 carrying the error text and
/// the active mode.
pub async fn print_receipt(State(state): State<Arc<AppState>>, Json(body): Json<Value>) -> Response {
    let Some(data) = body.get("data").filter(|v| !v.is_null()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Bad Request",
                "message": "Order data is required",
            })),
        )
            .into_response();
    };

    let order: Order = match serde_json::from_value(data.clone()) {
        Ok(order) => order,
        Err(e) => return failure_response(&state, &ReciboError::MalformedOrder(e.to_string())),
    };

    let rendered = receipt::compose(&order);

    match state.dispatcher.dispatch(&rendered).await {
        Ok(DispatchOutcome::Simulated { receipt }) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Simulation successful",
                "receipt": receipt,
            })),
        )
            .into_response(),
        Ok(DispatchOutcome::Printed { job_id }) => {
            tracing::info!(%job_id, order_number = %order.order_number, "receipt sent to printer");
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "message": "Sent to printer via PrintNode",
                    "jobId": job_id,
                })),
            )
                .into_response()
        }
        Err(e) => failure_response(&state, &e),
    }
}

fn failure_response(state: &AppState, error: &ReciboError) -> Response {
    let mode = state.config.mode.label();
    tracing::error!(mode, "printing failed: {error}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Printing Failed",
            "message": error.to_string(),
            "mode": mode,
        })),
    )
        .into_response()
}
