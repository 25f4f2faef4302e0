//! HTML page and form handlers.

use axum::{
    Form,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
};
use serde::Deserialize;
use std::mem;

use super::{
    ApiError, AppState, auth,
    grid::GridQuery,
    template::{Banner, DashboardPage},
};
use crate::board::{
    domain::{BoardDomainError, Credential, Progress, RowSelection, TaskKey, TaskRecord},
    services::NewTaskRequest,
};

type PageResponse = Result<(StatusCode, Html<String>), ApiError>;

/// Query string of the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub(super) struct PageQuery {
    #[serde(default)]
    selected: Option<String>,
    #[serde(flatten)]
    grid: GridQuery,
}

/// Fields of the add-task, add-subtask and edit forms.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct TaskForm {
    key: String,
    parent: String,
    area: String,
    start_date: String,
    end_date: String,
    topic: String,
    progress: String,
    leader: String,
    member: String,
    password: String,
    #[serde(flatten)]
    grid: GridQuery,
}

impl TaskForm {
    fn into_parts(self, headers: &HeaderMap) -> Result<(NewTaskRequest, Credential), ApiError> {
        let credential = auth::credential(headers, non_blank(self.password))?;
        let progress = parse_progress(&self.progress)?;
        let request = NewTaskRequest::new(self.area, self.start_date, self.end_date, self.topic)
            .with_progress(progress)
            .with_leader(self.leader)
            .with_member(self.member);
        Ok((request, credential))
    }
}

/// Fields of the delete form; the key comes from the row's delete button.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct DeleteForm {
    key: String,
    password: String,
    #[serde(flatten)]
    grid: GridQuery,
}

fn non_blank(value: String) -> Option<String> {
    Some(value).filter(|text| !text.is_empty())
}

fn parse_progress(raw: &str) -> Result<i64, BoardDomainError> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    Progress::parse(raw).map(|progress| i64::from(progress.value()))
}

fn parse_key(raw: &str) -> Result<Option<TaskKey>, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<u64>()
        .map_err(|_| ApiError::BadRequest(format!("`{trimmed}` is not a task key")))?;
    Ok(Some(TaskKey::new(value)?))
}

async fn render(
    state: &AppState,
    grid: &GridQuery,
    selected: Option<TaskKey>,
    outcome: Result<String, ApiError>,
) -> PageResponse {
    let (status, banner) = match outcome {
        Ok(message) => (StatusCode::OK, Some(Banner::Success(message))),
        Err(error) => (error.status(), Some(Banner::Error(error.to_string()))),
    };
    let (rows, chart) = state.snapshot().await?;
    let page = DashboardPage {
        rows: &rows,
        chart: &chart,
        grid,
        selected: present(&rows, selected),
        banner,
    };
    Ok((status, Html(state.renderer().render(&page)?)))
}

fn present(rows: &[TaskRecord], selected: Option<TaskKey>) -> Option<TaskKey> {
    selected.filter(|key| rows.iter().any(|row| row.key() == *key))
}

/// Renders the dashboard.
pub(super) async fn show(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, ApiError> {
    let selected = query
        .selected
        .as_deref()
        .and_then(|raw| parse_key(raw).ok().flatten());

    let (rows, chart) = state.snapshot().await?;
    let page = DashboardPage {
        rows: &rows,
        chart: &chart,
        grid: &query.grid,
        selected: present(&rows, selected),
        banner: None,
    };
    Ok(Html(state.renderer().render(&page)?))
}

/// Adds a root task from the add form.
pub(super) async fn add_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut form): Form<TaskForm>,
) -> PageResponse {
    let grid = mem::take(&mut form.grid);
    let outcome = submit_task(&state, &headers, form).await;
    render(&state, &grid, None, outcome).await
}

async fn submit_task(
    state: &AppState,
    headers: &HeaderMap,
    form: TaskForm,
) -> Result<String, ApiError> {
    let (request, credential) = form.into_parts(headers)?;
    let record = state.service().add_task(request, &credential).await?;
    Ok(format!("Added task {}: {}", record.key(), record.topic()))
}

/// Adds a subtask under the row named by the form's `parent` field.
pub(super) async fn add_subtask(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut form): Form<TaskForm>,
) -> PageResponse {
    let grid = mem::take(&mut form.grid);
    let parent = parse_key(&form.parent);
    let selected = parent.as_ref().ok().copied().flatten();
    let outcome = match parent {
        Ok(key) => submit_subtask(&state, &headers, form, &RowSelection::from(key)).await,
        Err(error) => Err(error),
    };
    render(&state, &grid, selected, outcome).await
}

async fn submit_subtask(
    state: &AppState,
    headers: &HeaderMap,
    form: TaskForm,
    selection: &RowSelection,
) -> Result<String, ApiError> {
    let (request, credential) = form.into_parts(headers)?;
    let record = state
        .service()
        .add_subtask(request, &credential, selection)
        .await?;
    Ok(format!("Added subtask {}: {}", record.key(), record.topic()))
}

/// Saves the edited cells of the selected row.
pub(super) async fn edit_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut form): Form<TaskForm>,
) -> PageResponse {
    let grid = mem::take(&mut form.grid);
    let key = parse_key(&form.key);
    let selected = key.as_ref().ok().copied().flatten();
    let outcome = match key {
        Ok(Some(edited)) => submit_edit(&state, &headers, form, edited).await,
        Ok(None) => Err(ApiError::BadRequest("select the row to edit first".to_owned())),
        Err(error) => Err(error),
    };
    render(&state, &grid, selected, outcome).await
}

async fn submit_edit(
    state: &AppState,
    headers: &HeaderMap,
    form: TaskForm,
    key: TaskKey,
) -> Result<String, ApiError> {
    let (request, credential) = form.into_parts(headers)?;
    let record = state
        .service()
        .update_task(key, request, &credential)
        .await?
        .ok_or(ApiError::NotFound(key))?;
    Ok(format!("Saved task {}: {}", record.key(), record.topic()))
}

/// Deletes the row whose delete button submitted the form.
pub(super) async fn delete_task(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(mut form): Form<DeleteForm>,
) -> PageResponse {
    let grid = mem::take(&mut form.grid);
    let outcome = submit_delete(&state, &headers, form).await;
    render(&state, &grid, None, outcome).await
}

async fn submit_delete(
    state: &AppState,
    headers: &HeaderMap,
    form: DeleteForm,
) -> Result<String, ApiError> {
    let credential = auth::credential(headers, non_blank(form.password))?;
    let key = parse_key(&form.key)?
        .ok_or_else(|| ApiError::BadRequest("choose the row to delete".to_owned()))?;
    let removed = state.service().delete_task(key, &credential).await?;
    removed
        .map(|record| format!("Deleted task {}: {}", record.key(), record.topic()))
        .ok_or(ApiError::NotFound(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Ok(0))]
    #[case(" 40 ", Ok(40))]
    #[case("140", Err(BoardDomainError::InvalidProgress(140)))]
    #[case("lots", Err(BoardDomainError::UnparseableProgress("lots".to_owned())))]
    fn form_progress_parsing(#[case] raw: &str, #[case] expected: Result<i64, BoardDomainError>) {
        assert_eq!(parse_progress(raw), expected);
    }

    #[rstest]
    fn blank_key_is_no_selection() {
        assert!(matches!(parse_key("  "), Ok(None)));
    }

    #[rstest]
    fn zero_key_is_a_domain_error() {
        assert!(matches!(
            parse_key("0"),
            Err(ApiError::Domain(BoardDomainError::InvalidTaskKey(0)))
        ));
    }

    #[rstest]
    fn non_numeric_key_is_a_bad_request() {
        assert!(matches!(parse_key("abc"), Err(ApiError::BadRequest(_))));
    }
}
