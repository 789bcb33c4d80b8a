use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::modules::invoice::layout;
use crate::shared::errors::ApiError;

#[derive(Deserialize)]
pub struct CreateInvoiceBody {
    pub filename: Option<String>,
    pub data: Option<Value>,
}

pub async fn create_invoice(
    body: Result<Json<CreateInvoiceBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::Validation("Missing filename or data".into()))?;

    let (Some(filename), Some(data)) = (
        body.filename.filter(|name| !name.is_empty()),
        body.data.filter(|data| !data.is_null()),
    ) else {
        return Err(ApiError::Validation("Missing filename or data".into()));
    };

    let path = layout::build(&filename, &data)?;
    Ok(Json(json!({
        "result": format!("Invoice saved to {}.", path.display())
    })))
}
