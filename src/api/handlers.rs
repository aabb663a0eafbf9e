//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use super::AppState;
use super::types::{ErrorResponse, PresetList};
use crate::balance::ProcessInputs;
use crate::config::CaseConfig;
use crate::report::CaseReport;

/// Returns the case loaded at startup.
///
/// `GET /state` → 200 + `CaseReport` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<CaseReport> {
    Json(state.case.clone())
}

/// `GET /presets` → 200 + `PresetList` JSON
pub async fn list_presets() -> Json<PresetList> {
    Json(PresetList {
        presets: CaseConfig::PRESETS.to_vec(),
    })
}

/// Computes a named preset.
///
/// `GET /presets/{name}` → 200 + `CaseReport` JSON, or 404 + `ErrorResponse`
pub async fn get_preset(
    Path(name): Path<String>,
) -> Result<Json<CaseReport>, (StatusCode, Json<ErrorResponse>)> {
    let cfg = CaseConfig::from_preset(&name).map_err(|e| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: e.message,
            }),
        )
    })?;
    Ok(Json(CaseReport::from_config(&cfg)))
}

/// Computes the balance for posted inputs. Missing fields take reference values.
///
/// `POST /compute` with `ProcessInputs` JSON → 200 + `CaseReport` JSON
pub async fn compute(Json(inputs): Json<ProcessInputs>) -> Json<CaseReport> {
    Json(CaseReport::new("request", inputs))
}
