//! JSON API handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde::{Deserialize, Serialize};

use super::{ApiError, AppState, auth};
use crate::board::{
    adapters::access::Session,
    domain::{AccessDenied, Credential, RowSelection, TaskKey, TaskRecord},
    services::{GridRow, NewTaskRequest},
};
use crate::chart::TimelineChart;

/// Body of the add-task, add-subtask and update endpoints.
#[derive(Debug, Deserialize)]
pub(super) struct TaskBody {
    area: String,
    start_date: String,
    end_date: String,
    topic: String,
    #[serde(default)]
    progress: i64,
    #[serde(default)]
    leader: String,
    #[serde(default)]
    member: String,
    #[serde(default)]
    password: Option<String>,
}

impl TaskBody {
    fn into_parts(self, headers: &HeaderMap) -> Result<(NewTaskRequest, Credential), ApiError> {
        let credential = auth::credential(headers, self.password)?;
        let request = NewTaskRequest::new(self.area, self.start_date, self.end_date, self.topic)
            .with_progress(self.progress)
            .with_leader(self.leader)
            .with_member(self.member);
        Ok((request, credential))
    }
}

/// Body of the full-table replacement endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct ReplaceBody {
    rows: Vec<GridRow>,
    #[serde(default)]
    password: Option<String>,
}

/// Optional body of the delete endpoint.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PasswordBody {
    #[serde(default)]
    password: Option<String>,
}

/// Body of the login endpoint.
#[derive(Debug, Deserialize)]
pub(super) struct LoginBody {
    #[serde(default)]
    name: String,
    password: String,
}

/// Table rows together with the chart projected from them.
#[derive(Debug, Serialize)]
pub(super) struct TableResponse {
    rows: Vec<TaskRecord>,
    chart: TimelineChart,
}

/// Result of a single-row mutation plus the table state after it.
#[derive(Debug, Serialize)]
pub(super) struct MutationResponse {
    record: TaskRecord,
    rows: Vec<TaskRecord>,
    chart: TimelineChart,
}

async fn table(state: &AppState) -> Result<TableResponse, ApiError> {
    let (rows, chart) = state.snapshot().await?;
    Ok(TableResponse { rows, chart })
}

async fn mutation(state: &AppState, record: TaskRecord) -> Result<MutationResponse, ApiError> {
    let TableResponse { rows, chart } = table(state).await?;
    Ok(MutationResponse {
        record,
        rows,
        chart,
    })
}

/// Lists all rows with the current chart.
pub(super) async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<TableResponse>, ApiError> {
    Ok(Json(table(&state).await?))
}

/// Adds a root task.
pub(super) async fn add_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<TaskBody>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let (request, credential) = body.into_parts(&headers)?;
    let record = state.service().add_task(request, &credential).await?;
    Ok((StatusCode::CREATED, Json(mutation(&state, record).await?)))
}

/// Adds a subtask under the task in the path.
pub(super) async fn add_subtask(
    State(state): State<AppState>,
    Path(parent): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<TaskBody>,
) -> Result<(StatusCode, Json<MutationResponse>), ApiError> {
    let selection = RowSelection::one(TaskKey::new(parent)?);
    let (request, credential) = body.into_parts(&headers)?;
    let record = state
        .service()
        .add_subtask(request, &credential, &selection)
        .await?;
    Ok((StatusCode::CREATED, Json(mutation(&state, record).await?)))
}

/// Deletes the task in the path.
///
/// The body is optional so that bearer-token callers can send none.
pub(super) async fn delete_task(
    State(state): State<AppState>,
    Path(raw_key): Path<u64>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MutationResponse>, ApiError> {
    let key = TaskKey::new(raw_key)?;
    let PasswordBody { password } = if body.is_empty() {
        PasswordBody::default()
    } else {
        serde_json::from_slice(&body).map_err(|error| ApiError::BadRequest(error.to_string()))?
    };
    let credential = auth::credential(&headers, password)?;

    let removed = state
        .service()
        .delete_task(key, &credential)
        .await?
        .ok_or(ApiError::NotFound(key))?;
    Ok(Json(mutation(&state, removed).await?))
}

/// Overwrites the editable fields of the task in the path.
pub(super) async fn update_task(
    State(state): State<AppState>,
    Path(raw_key): Path<u64>,
    headers: HeaderMap,
    Json(body): Json<TaskBody>,
) -> Result<Json<MutationResponse>, ApiError> {
    let key = TaskKey::new(raw_key)?;
    let (request, credential) = body.into_parts(&headers)?;
    let updated = state
        .service()
        .update_task(key, request, &credential)
        .await?
        .ok_or(ApiError::NotFound(key))?;
    Ok(Json(mutation(&state, updated).await?))
}

/// Replaces the whole table.
pub(super) async fn replace_rows(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<ReplaceBody>,
) -> Result<Json<TableResponse>, ApiError> {
    let credential = auth::credential(&headers, body.password)?;
    state.service().replace_rows(body.rows, &credential).await?;
    Ok(Json(table(&state).await?))
}

/// Returns the projected chart.
pub(super) async fn chart(State(state): State<AppState>) -> Result<Json<TimelineChart>, ApiError> {
    let (_, projected) = state.snapshot().await?;
    Ok(Json(projected))
}

/// Opens a session and returns its bearer token.
pub(super) async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<(StatusCode, Json<Session>), ApiError> {
    let session = state
        .sessions()
        .login(&body.name, &body.password, state.clock())?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Revokes the session named by the bearer token.
pub(super) async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token = auth::bearer_token(&headers).ok_or(AccessDenied::MissingCredential)??;
    state
        .sessions()
        .logout(token)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::Access(AccessDenied::UnknownToken))
}

/// Liveness probe.
pub(super) async fn health() -> &'static str {
    "ok"
}
