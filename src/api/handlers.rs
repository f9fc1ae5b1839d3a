use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::store::{Counter, CounterId, CounterRepository};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn CounterRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn CounterRepository>) -> Self {
        Self { repo }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "tallyboard".to_string(),
    })
}

/// `GET /api/counters`
pub async fn list_counters(State(state): State<AppState>) -> Result<Json<Vec<Counter>>, ApiError> {
    let counters = state.repo.find_all()?;
    tracing::debug!(count = counters.len(), "Listed counters");
    Ok(Json(counters))
}

#[derive(Debug, Deserialize)]
pub struct IncrementParams {
    #[serde(default = "default_delta")]
    pub value: i64,
}

fn default_delta() -> i64 {
    1
}

/// `POST /api/counters/{id}/inc?value={delta}`
pub async fn increment_counter(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<IncrementParams>, QueryRejection>,
) -> Result<Json<Counter>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let Query(params) = params.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let counter = state.repo.increment(CounterId(id), params.value)?;
    tracing::info!(
        counter = %counter.counter_id,
        delta = params.value,
        value = counter.value,
        "Counter incremented"
    );
    Ok(Json(counter))
}
