use anyhow::Context;
use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use service_core::error::AppError;

const INVALID_NUMBER: &str = "Please provide a valid number";

#[derive(Debug, Deserialize)]
pub struct AddTenRequest {
    /// Kept as raw JSON so strings and nulls reach validation instead of
    /// failing deserialization.
    #[serde(default)]
    pub number: Option<Value>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct AddTenResponse {
    pub original: Number,
    pub result: Number,
    pub operation: &'static str,
}

#[tracing::instrument(skip(payload))]
pub async fn add_ten(
    payload: Result<Json<AddTenRequest>, JsonRejection>,
) -> Result<Json<AddTenResponse>, AppError> {
    let Ok(Json(request)) = payload else {
        return Err(AppError::BadRequest(INVALID_NUMBER.to_string()));
    };

    let Some(Value::Number(original)) = request.number else {
        return Err(AppError::BadRequest(INVALID_NUMBER.to_string()));
    };

    let result = add_ten_to(&original)?;

    Ok(Json(AddTenResponse {
        original,
        result,
        operation: "added 10",
    }))
}

/// `n + 10`, in integer arithmetic when `n` is an integer that leaves room,
/// in f64 otherwise.
pub fn add_ten_to(n: &Number) -> anyhow::Result<Number> {
    if let Some(sum) = n.as_i64().and_then(|i| i.checked_add(10)) {
        return Ok(sum.into());
    }
    if let Some(sum) = n.as_u64().and_then(|u| u.checked_add(10)) {
        return Ok(sum.into());
    }

    let value = n.as_f64().context("number is not representable as f64")?;
    Number::from_f64(value + 10.0).context("result is not a finite number")
}
