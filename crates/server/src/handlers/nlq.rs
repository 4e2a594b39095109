//! Natural-language filtering endpoint.

use crate::error::{ApiError, ApiResult};
use crate::handlers::strings::scan_records;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use corpus_core::{FilterSet, StringRecord, nlq};
use serde::{Deserialize, Serialize};

/// Query parameters for the natural-language endpoint.
#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: Option<String>,
}

/// Echo of how the free-text query was interpreted.
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterSet,
}

/// Response envelope for natural-language filtering.
#[derive(Debug, Serialize)]
pub struct NaturalLanguageResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

/// GET /api/strings/filter-by-natural-language - Filter via a free-text phrase.
///
/// The translator is a fixed heuristic: it either extracts a filter set and
/// runs it through the same engine as the structured path, or fails with a
/// distinct unparseable / conflicting-filters error. The response always
/// echoes the original query and the extracted filters.
pub async fn filter_by_natural_language(
    State(state): State<AppState>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<NaturalLanguageResponse>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;

    let filters = nlq::translate(&query)?;
    tracing::debug!(query = %query, ?filters, "natural-language query translated");

    let records = scan_records(&state).await?;
    let data = filters.apply(records);

    Ok(Json(NaturalLanguageResponse {
        count: data.len(),
        data,
        interpreted_query: InterpretedQuery {
            original: query,
            parsed_filters: filters,
        },
    }))
}
