use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use std::time::Instant;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::verdict::Verdict;
use crate::routes::catalog::catalog_failure;
use crate::services::validation;

/// POST /api/validate — grade a cocktail attempt.
///
/// The body is parsed leniently: anything that is not a JSON object is
/// graded as an empty submission rather than rejected.
pub async fn validate_submission(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Verdict>, StatusCode> {
    let start = Instant::now();
    let validation_id = Uuid::new_v4();

    let payload = serde_json::from_slice::<Value>(&body)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Map::new()));

    let (cocktails, alcohols) =
        tokio::try_join!(state.catalog.cocktails(), state.catalog.alcohols())
            .map_err(catalog_failure)?;

    let verdict = validation::evaluate_payload(&payload, &cocktails, &alcohols);

    let outcome = if verdict.ok { "passed" } else { "failed" };
    metrics::counter!("validations_total", "outcome" => outcome).increment(1);
    metrics::histogram!("validation_duration_seconds").record(start.elapsed().as_secs_f64());

    tracing::info!(
        %validation_id,
        cocktail_id = ?payload.get("cocktailId"),
        ok = verdict.ok,
        errors = verdict.errors.len(),
        warnings = verdict.warnings.len(),
        "Graded submission"
    );

    Ok(Json(verdict))
}
