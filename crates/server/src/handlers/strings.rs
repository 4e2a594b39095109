//! String record endpoints: create, lookup, delete, and structured listing.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use corpus_core::{FilterSet, RawFilterParams, StringRecord};
use corpus_metadata::{MetadataError, StringRow};
use serde::{Deserialize, Serialize};

/// Request body for creating an analyzed string.
#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    pub value: String,
}

/// Response envelope for structured listing.
#[derive(Debug, Serialize)]
pub struct ListStringsResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterSet,
}

/// POST /api/strings - Analyze and store a new string.
///
/// The record id is the content hash of the value, so duplicates are rejected
/// by the store's conditional insert rather than a separate existence check.
pub async fn create_string(
    State(state): State<AppState>,
    Json(request): Json<CreateStringRequest>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let record = StringRecord::new(request.value);
    let row = StringRow::from_record(&record)?;

    state.metadata.insert_string(&row).await.map_err(|e| match e {
        MetadataError::AlreadyExists(_) => ApiError::Conflict("string already exists".to_string()),
        other => other.into(),
    })?;

    tracing::info!(id = %record.id, length = record.properties.length, "string created");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/strings/{value} - Exact-value lookup.
pub async fn get_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let row = state
        .metadata
        .get_string_by_value(&value)
        .await?
        .ok_or_else(|| ApiError::NotFound("string not found".to_string()))?;

    Ok(Json(row.into_record()?))
}

/// DELETE /api/strings/{value} - Delete by exact value.
pub async fn delete_string(
    State(state): State<AppState>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    let deleted = state.metadata.delete_string_by_value(&value).await?;
    if !deleted {
        return Err(ApiError::NotFound("string not found".to_string()));
    }

    tracing::info!("string deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/strings - List records matching the structured filters.
///
/// Always scan-then-filter: the store returns the full collection in a stable
/// order and the core filter engine evaluates every predicate in memory.
pub async fn list_strings(
    State(state): State<AppState>,
    Query(params): Query<RawFilterParams>,
) -> ApiResult<Json<ListStringsResponse>> {
    let filters = FilterSet::from_raw(&params)?;
    filters.validate()?;

    let records = scan_records(&state).await?;
    let data = filters.apply(records);

    Ok(Json(ListStringsResponse {
        count: data.len(),
        data,
        filters_applied: filters,
    }))
}

/// Fetch the full collection and decode rows into domain records.
pub(crate) async fn scan_records(state: &AppState) -> ApiResult<Vec<StringRecord>> {
    state
        .metadata
        .list_strings()
        .await?
        .into_iter()
        .map(|row| row.into_record().map_err(ApiError::from))
        .collect()
}
