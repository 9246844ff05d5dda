use adb_service::{ArtifactView, CreateArtifactCommand, ServiceError};
use adb_types::{ArtifactSet, ArtifactType};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

type ApiResult<T> = Result<T, ApiError>;

/// Liveness plus the current artifact count.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let count = state
        .artifact_count()
        .map_err(|e| ApiError::from(ServiceError::from(e)))?;
    Ok(Json(json!({ "status": "ok", "artifacts": count })))
}

pub async fn get_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ArtifactView>> {
    Ok(Json(state.read.get_artifact(&id)?))
}

/// Artifacts in one slot.
///
/// Path segments here and in the set routes convert leniently: a value
/// outside the enumerations can only match snapshot entries carrying the
/// same unrecognized value, so it ends in 404 rather than 400.
pub async fn get_artifacts_by_type(
    State(state): State<AppState>,
    Path(artifact_type): Path<String>,
) -> ApiResult<Json<Vec<ArtifactView>>> {
    let artifact_type = ArtifactType::from(artifact_type);
    Ok(Json(state.read.get_artifacts_by_type(&artifact_type)?))
}

pub async fn get_artifacts_by_set(
    State(state): State<AppState>,
    Path(set): Path<String>,
) -> ApiResult<Json<Vec<ArtifactView>>> {
    let set = ArtifactSet::from(set);
    Ok(Json(state.read.get_artifacts_by_set(&set)?))
}

pub async fn get_artifacts_by_type_and_set(
    State(state): State<AppState>,
    Path((artifact_type, set)): Path<(String, String)>,
) -> ApiResult<Json<Vec<ArtifactView>>> {
    let artifact_type = ArtifactType::from(artifact_type);
    let set = ArtifactSet::from(set);
    Ok(Json(state.read.get_artifacts_by_type_and_set(&artifact_type, &set)?))
}

pub async fn create_artifact(
    State(state): State<AppState>,
    payload: Result<Json<CreateArtifactCommand>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let Json(command) = payload.map_err(|_| ApiError::InvalidBody)?;
    let id = state.write.create_artifact(command)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Artifact created successfully", "id": id })),
    ))
}

pub async fn delete_artifact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.write.delete_artifact(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
