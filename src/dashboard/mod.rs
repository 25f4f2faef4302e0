//! HTTP controller for the dashboard.
//!
//! Each handler dispatches one table operation to the shared
//! [`DashboardService`] and then re-projects the chart from the updated rows,
//! so every response reflects the table state after the mutation. The HTML
//! page is rendered with `minijinja`; the same operations are exposed as a
//! JSON API under `/api`.

mod api;
mod auth;
mod error;
pub mod grid;
mod page;
mod state;
mod template;

pub use error::ApiError;
pub use state::{AppState, DashboardService};
pub use template::PageRenderer;

use axum::{
    Router,
    routing::{get, post, put},
};

/// Builds the dashboard router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::show))
        .route("/tasks", post(page::add_task))
        .route("/tasks/subtasks", post(page::add_subtask))
        .route("/tasks/edit", post(page::edit_task))
        .route("/tasks/delete", post(page::delete_task))
        .route(
            "/api/tasks",
            get(api::list_tasks)
                .post(api::add_task)
                .put(api::replace_rows),
        )
        .route(
            "/api/tasks/{key}",
            put(api::update_task).delete(api::delete_task),
        )
        .route("/api/tasks/{key}/subtasks", post(api::add_subtask))
        .route("/api/chart", get(api::chart))
        .route("/api/sessions", post(api::login).delete(api::logout))
        .route("/healthz", get(api::health))
        .with_state(state)
}
