//! Request handlers for the todo HTTP API.
//!
//! Handlers are thin: they unpack the wire payload, call into the injected
//! [`TodoService`], and serialise the result. All status-code decisions live
//! in [`ApiError`](super::error::ApiError).

use super::dto::{
    CreateTodoBody, DateTallyResponse, HealthResponse, ListQuery, MessageResponse, TodoResponse,
    UpdateTodoBody,
};
use super::error::ApiError;
use crate::todo::domain::TodoId;
use crate::todo::ports::TodoRepository;
use crate::todo::services::{CreateTodoRequest, TodoService, UpdateTodoRequest};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use mockable::Clock;
use std::collections::HashMap;

/// `GET /api/health` — liveness probe.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `GET /api/todos` — list records, optionally filtered to one date.
pub async fn list_todos<R, C>(
    State(service): State<TodoService<R, C>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TodoResponse>>, ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let items = service.list(query.date.as_deref()).await?;
    Ok(Json(items.iter().map(TodoResponse::from).collect()))
}

/// `POST /api/todos` — create a record.
pub async fn create_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let (Some(text), Some(date)) = (body.text, body.date) else {
        return Err(ApiError::bad_request("text and date are required"));
    };
    let request = CreateTodoRequest::new(text, date).with_completed(body.completed.unwrap_or(false));
    let item = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(TodoResponse::from(&item))))
}

/// `GET /api/todos/{id}` — fetch a single record.
pub async fn get_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<TodoResponse>, ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let item = service.get_by_id(TodoId::new(id)).await?;
    Ok(Json(TodoResponse::from(&item)))
}

/// `PUT /api/todos/{id}` — partial update.
pub async fn update_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<TodoResponse>, ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let mut request = UpdateTodoRequest::new();
    if let Some(text) = body.text {
        request = request.with_text(text);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }
    if let Some(date) = body.date {
        request = request.with_date(date);
    }
    let item = service.update(TodoId::new(id), request).await?;
    Ok(Json(TodoResponse::from(&item)))
}

/// `DELETE /api/todos/{id}` — permanent removal.
pub async fn delete_todo<R, C>(
    State(service): State<TodoService<R, C>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    service.delete(TodoId::new(id)).await?;
    Ok(Json(MessageResponse {
        message: "Todo deleted successfully",
    }))
}

/// `GET /api/todos/dates` — per-date record counts.
pub async fn date_summary<R, C>(
    State(service): State<TodoService<R, C>>,
) -> Result<Json<HashMap<NaiveDate, DateTallyResponse>>, ApiError>
where
    R: TodoRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let summary = service.date_summary().await?;
    Ok(Json(
        summary
            .into_iter()
            .map(|(date, tally)| (date, DateTallyResponse::from(tally)))
            .collect(),
    ))
}
