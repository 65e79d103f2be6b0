//! API Handlers
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use roi_catalog::Selection;
use roi_core::{BusinessInputs, ModelAssumptions, ProfilePatch, MODEL_VERSION};
use roi_engine::{evaluate, Report};
use roi_profile::scenario::DEFAULT_PRODUCT;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::TraceId;
use crate::AppState;

/// Body of `/v1/compute` and `/v1/render`; missing parts use the defaults
#[derive(Debug, Default, Deserialize)]
pub struct ScenarioRequest {
    pub inputs: Option<BusinessInputs>,
    pub assumptions: Option<ModelAssumptions>,
    pub selection: Option<Vec<String>>,
}

impl ScenarioRequest {
    /// Requested selection with unknown ids, duplicates and extra
    /// exclusive packages removed
    fn selection(&self, state: &AppState) -> Selection {
        match &self.selection {
            Some(ids) => Selection::from_ids(ids, &state.catalog),
            None => Selection::from_ids([DEFAULT_PRODUCT], &state.catalog),
        }
    }

    fn evaluate(&self, state: &AppState) -> Report {
        let selection = self.selection(state);
        let report = evaluate(
            &self.inputs.unwrap_or_default(),
            &self.assumptions.unwrap_or_default(),
            selection.ids(),
            &state.catalog,
        );
        state.metrics.computations.inc();
        report
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub report: Report,
    pub fingerprint: String,
    pub trace_id: String,
    /// Inputs or assumptions outside their slider ranges
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub selection: Vec<String>,
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub description: String,
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "modelVersion": MODEL_VERSION,
            "time": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

pub async fn catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.as_ref().clone())
}

pub async fn sliders(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.sliders.clone())
}

pub async fn defaults(State(state): State<AppState>) -> Json<Value> {
    let selection = Selection::from_ids([DEFAULT_PRODUCT], &state.catalog);
    Json(json!({
        "inputs": BusinessInputs::default(),
        "assumptions": ModelAssumptions::default(),
        "selection": selection,
    }))
}

pub async fn compute(
    State(state): State<AppState>,
    Extension(trace): Extension<TraceId>,
    Json(request): Json<ScenarioRequest>,
) -> Json<ComputeResponse> {
    let mut warnings: Vec<String> = Vec::new();
    if let Some(inputs) = &request.inputs {
        warnings.extend(state.sliders.validate_inputs(inputs).iter().map(|v| v.to_string()));
    }
    if let Some(assumptions) = &request.assumptions {
        warnings.extend(
            state
                .sliders
                .validate_assumptions(assumptions)
                .iter()
                .map(|v| v.to_string()),
        );
    }

    if let Some(requested) = &request.selection {
        let selection = request.selection(&state);
        if selection.ids() != requested.as_slice() {
            warnings.push(format!(
                "selection normalized to [{}]",
                selection.ids().join(", ")
            ));
        }
    }

    let report = request.evaluate(&state);
    tracing::debug!(
        trace_id = %trace.0,
        total_gain = report.gains.total_monthly_gain,
        "report computed"
    );

    Json(ComputeResponse {
        fingerprint: report.fingerprint(),
        report,
        trace_id: trace.0,
        warnings,
    })
}

pub async fn toggle_selection(
    State(state): State<AppState>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<Selection>, ApiError> {
    let mut selection = Selection::from_ids(&request.selection, &state.catalog);
    if !selection.toggle(&request.id, &state.catalog) {
        return Err(ApiError::UnknownProduct(request.id));
    }
    Ok(Json(selection))
}

pub async fn profile(
    State(state): State<AppState>,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<ProfilePatch>, ApiError> {
    let description = request.description.trim();
    if description.is_empty() {
        return Err(ApiError::BadRequest("description must not be empty".to_string()));
    }

    let outcome = state.coordinator.generate(description).await;
    let label = match &outcome {
        Ok(Some(_)) => "ok",
        Ok(None) => "superseded",
        Err(_) => "error",
    };
    state
        .metrics
        .profile_generations
        .with_label_values(&[label])
        .inc();

    match outcome? {
        Some(patch) => Ok(Json(patch)),
        None => Err(ApiError::Superseded),
    }
}

pub async fn render(
    State(state): State<AppState>,
    Json(request): Json<ScenarioRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = request.evaluate(&state);
    let text = state.renderer.render(roi_render::SUMMARY_TEMPLATE, &report)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .encode()
        .map_err(|e| ApiError::Internal(e.to_string()))
}
