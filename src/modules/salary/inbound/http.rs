use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use serde::Deserialize;

use crate::modules::salary::{SalaryBreakdown, calculate};
use crate::shared::errors::ApiError;

const MISSING_INPUTS: &str = "Missing 'present_days' or 'pay_per_day'";

#[derive(Deserialize)]
pub struct CalculateSalaryParams {
    pub present_days: Option<i64>,
    pub pay_per_day: Option<i64>,
}

pub async fn calculate_salary(
    params: Result<Query<CalculateSalaryParams>, QueryRejection>,
) -> Result<Json<SalaryBreakdown>, ApiError> {
    // A non-integer value fails query deserialization and lands here too.
    let Query(params) = params.map_err(|_| ApiError::Validation(MISSING_INPUTS.into()))?;

    let (Some(present_days), Some(pay_per_day)) = (params.present_days, params.pay_per_day) else {
        return Err(ApiError::Validation(MISSING_INPUTS.into()));
    };

    Ok(Json(calculate(present_days, pay_per_day)))
}
