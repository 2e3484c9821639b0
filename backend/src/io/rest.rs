//! # REST API Interface Layer
//!
//! HTTP endpoints for the tip splitter. This layer handles request and
//! response serialization, input validation, and translation of domain
//! results into the response envelope. It contains no business logic.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::AppState;
use shared::{
    validate_bill_amount, validate_split_count, validate_tip_percentage, CalculateRequest,
    CalculateResponse, ValidationError,
};

/// Calculate tip, total, and per-person amounts.
///
/// Every response, including validation failures and malformed bodies, uses
/// the `{ success, data?, error? }` envelope so clients can treat any
/// well-formed response as authoritative.
pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> (StatusCode, Json<CalculateResponse>) {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            error!("POST /api/calculate - rejected body: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(CalculateResponse::failure(
                    "Missing required fields: bill_amount, tip_percentage, split_count",
                )),
            );
        }
    };

    info!("POST /api/calculate - request: {:?}", request);

    match validate_request(&request) {
        Ok(()) => {
            let result = state.calculator_service.calculate(&request);
            (StatusCode::OK, Json(CalculateResponse::ok(result)))
        }
        Err(e) => {
            info!("POST /api/calculate - invalid input: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(CalculateResponse::failure(e.to_string())),
            )
        }
    }
}

// Bill first, then tip, then split; the first failure is the one reported.
fn validate_request(request: &CalculateRequest) -> Result<(), ValidationError> {
    validate_bill_amount(request.bill_amount)?;
    validate_tip_percentage(request.tip_percentage)?;
    validate_split_count(request.split_count as i64)?;
    Ok(())
}
