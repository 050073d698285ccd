//! `/api/events` handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};

use super::app_state::SharedState;
use super::error::{ApiResult, StatusBody, blocking};
use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::update::UpdateLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppError;
use crate::models::{CalendarEvent, EventInput};

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::Validation(e.body_text()))
}

fn parse_input(payload: Result<Json<EventInput>, JsonRejection>) -> Result<EventInput, AppError> {
    payload
        .map(|Json(input)| input)
        .map_err(|e| AppError::Validation(e.body_text()))
}

/// GET /api/events
pub async fn list_events(State(state): State<SharedState>) -> ApiResult<Json<Vec<CalendarEvent>>> {
    let db = state.db_path();
    let events = blocking(move || {
        let pool = DbPool::new(&db)?;
        queries::list_events(&pool.conn)
    })
    .await?;

    Ok(Json(events.iter().map(CalendarEvent::from).collect()))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<SharedState>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<Json<StatusBody>> {
    let input = parse_input(payload)?;

    let guard = state.write_lock.clone().lock_owned().await;
    let st = state.clone();
    blocking(move || {
        let _guard = guard;
        let mut pool = DbPool::new(&st.db_path())?;
        AddLogic::apply(&mut pool, &st.backups, input.date, &input.kind)
    })
    .await?;

    Ok(Json(StatusBody::success()))
}

/// PUT /api/events/{id}
pub async fn update_event(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EventInput>, JsonRejection>,
) -> ApiResult<Json<StatusBody>> {
    let id = parse_id(id)?;
    let input = parse_input(payload)?;

    let guard = state.write_lock.clone().lock_owned().await;
    let st = state.clone();
    blocking(move || {
        let _guard = guard;
        let mut pool = DbPool::new(&st.db_path())?;
        UpdateLogic::apply(&mut pool, &st.backups, id, input.date, &input.kind)
    })
    .await?;

    Ok(Json(StatusBody::success()))
}

/// DELETE /api/events/{id}
pub async fn delete_event(
    State(state): State<SharedState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<StatusBody>> {
    let id = parse_id(id)?;

    let guard = state.write_lock.clone().lock_owned().await;
    let st = state.clone();
    blocking(move || {
        let _guard = guard;
        let mut pool = DbPool::new(&st.db_path())?;
        DeleteLogic::apply(&mut pool, &st.backups, id)
    })
    .await?;

    Ok(Json(StatusBody::success()))
}
