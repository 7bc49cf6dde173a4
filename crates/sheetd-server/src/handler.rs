use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};
use tracing::debug;

use sheetd_types::Dataset;

use crate::body;
use crate::error::ApiError;
use crate::router::AppState;

/// `GET /api/data` — return the full dataset.
pub async fn get_data(State(state): State<AppState>) -> Result<Json<Dataset>, ApiError> {
    let dataset = state.store().load()?;
    Ok(Json(dataset))
}

/// `POST /api/columns` — replace the column set.
///
/// The body must carry a `columns` field holding an array of strings. Keys
/// of columns dropped from the set are pruned from every record; surviving
/// records are otherwise untouched.
pub async fn replace_columns(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<Dataset>, ApiError> {
    let payload = body::decode(req.into_body()).await?;
    let columns = match payload.get("columns") {
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ApiError::Validation(
                "\"columns\" must be an array".to_string(),
            ))
        }
        None => {
            return Err(ApiError::Validation(
                "body must contain a \"columns\" array".to_string(),
            ))
        }
    };
    let mut names = Vec::with_capacity(columns.len());
    for item in columns {
        match item {
            Value::String(name) => names.push(name.clone()),
            other => {
                return Err(ApiError::Validation(format!(
                    "column names must be strings, got {other}"
                )))
            }
        }
    }

    let _write = state.write_guard().await;
    let mut dataset = state.store().load()?;
    debug!(old = dataset.columns.len(), new = names.len(), "replacing column set");
    dataset.replace_columns(names);
    state.store().save(&dataset)?;
    Ok(Json(dataset))
}

/// `POST /api/records` — append one record.
///
/// The body must be a plain JSON object. The new record contains exactly
/// the current columns; missing or falsy fields become the empty string and
/// extraneous fields are ignored. Responds 201 with the full dataset.
pub async fn append_record(
    State(state): State<AppState>,
    req: Request,
) -> Result<(StatusCode, Json<Dataset>), ApiError> {
    let payload = body::decode(req.into_body()).await?;
    let fields = match payload {
        Value::Object(fields) => fields,
        _ => {
            return Err(ApiError::Validation(
                "body must be a plain JSON object".to_string(),
            ))
        }
    };

    let _write = state.write_guard().await;
    let mut dataset = state.store().load()?;
    dataset.append_record(&fields);
    debug!(records = dataset.records.len(), "record appended");
    state.store().save(&dataset)?;
    Ok((StatusCode::CREATED, Json(dataset)))
}

/// `DELETE /api/records/{index}` — remove the record at a position.
///
/// The path segment must parse as a base-10 integer within bounds; anything
/// else is 404. Subsequent records shift down by one.
pub async fn remove_record(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
) -> Result<Json<Dataset>, ApiError> {
    let index: usize = raw_index
        .parse()
        .map_err(|_| ApiError::RecordNotFound(raw_index.clone()))?;

    let _write = state.write_guard().await;
    let mut dataset = state.store().load()?;
    dataset
        .remove_record(index)
        .ok_or_else(|| ApiError::RecordNotFound(raw_index.clone()))?;
    debug!(index, records = dataset.records.len(), "record removed");
    state.store().save(&dataset)?;
    Ok(Json(dataset))
}

/// Fallback for any unmatched (method, path) pair.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
