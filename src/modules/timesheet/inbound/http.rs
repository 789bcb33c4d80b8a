use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use serde::Deserialize;
use serde_json::{Value, json};
use std::path::Path;

use crate::modules::timesheet::store;
use crate::shared::errors::ApiError;

#[derive(Deserialize)]
pub struct ReadTimesheetParams {
    pub filename: String,
}

pub async fn read_timesheet(
    params: Result<Query<ReadTimesheetParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params.map_err(|_| ApiError::Validation("Missing filename".into()))?;

    let rendered = store::read_all(Path::new(&params.filename))?;
    Ok(Json(json!({ "result": rendered })))
}

#[derive(Deserialize)]
pub struct UpsertTimesheetBody {
    pub filename: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
    pub remarks: Option<String>,
}

pub async fn save_or_update(
    body: Result<Json<UpsertTimesheetBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::Validation("Missing required fields".into()))?;

    let present = |field: &Option<String>| field.clone().filter(|value| !value.is_empty());
    let (Some(filename), Some(date), Some(status), Some(remarks)) = (
        present(&body.filename),
        present(&body.date),
        present(&body.status),
        present(&body.remarks),
    ) else {
        return Err(ApiError::Validation("Missing required fields".into()));
    };

    let action = store::upsert_entry(Path::new(&filename), &date, &status, &remarks)?;
    Ok(Json(json!({
        "result": format!("Success: Entry for {date} was {action} in {filename}.")
    })))
}
