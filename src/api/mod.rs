use axum::Json;
use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{patch, post, put};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::*;
use crate::services::{AllocationSlice, ScheduleSlot, build_plan_prompt, derive_schedule, time_allocation};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedSession {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AddedCourse {
    pub index: usize,
    pub course: CourseDeadline,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesRequest {
    pub preferences: String,
}

#[derive(Debug, Deserialize)]
pub struct DaysRequest {
    pub days: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimesRequest {
    pub times: Vec<String>,
}

/// Deadline table row, keyed by the date rendered as "%Y-%m-%d".
#[derive(Debug, Serialize)]
pub struct DeadlineRow {
    pub date: String,
    pub course: String,
}

/// Everything the dashboard view shows: the deadline table, the generated
/// plan text, the derived weekly schedule and the pie-chart breakdown.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub deadlines: Vec<DeadlineRow>,
    pub study_plan: String,
    pub weekly_schedule: Vec<ScheduleSlot>,
    pub time_allocation: Vec<AllocationSlice>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/courses", post(add_course))
        .route("/sessions/{id}/courses/{index}", patch(edit_course))
        .route("/sessions/{id}/preferences", put(set_preferences))
        .route("/sessions/{id}/days", put(set_study_days))
        .route("/sessions/{id}/times", put(set_study_times))
        .route("/sessions/{id}/generate", post(generate_plan))
        .route("/sessions/{id}/dashboard", get(dashboard))
        .route("/sessions/{id}/export", get(export_plan))
        .route("/sessions/{id}/reset", post(reset_session))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn create_session(State(state): State<AppState>) -> Json<CreatedSession> {
    let id = state.sessions.create();
    Json(CreatedSession { id })
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlannerSession>, AppError> {
    let session = state.sessions.get(&id).ok_or(AppError::NotFound)?;
    Ok(Json(session))
}

async fn add_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AddedCourse>, AppError> {
    let today = Local::now().date_naive();
    let added = state
        .sessions
        .update(&id, |session| {
            session.deadlines.push(CourseDeadline::new_for(today));
            AddedCourse {
                index: session.deadlines.len() - 1,
                course: session.deadlines[session.deadlines.len() - 1].clone(),
            }
        })
        .ok_or(AppError::NotFound)?;
    Ok(Json(added))
}

async fn edit_course(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    Json(req): Json<EditCourseRequest>,
) -> Result<Json<CourseDeadline>, AppError> {
    let updated = state
        .sessions
        .update(&id, |session| {
            let entry = session.deadlines.get_mut(index).ok_or(AppError::NotFound)?;
            if let Some(course) = req.course {
                entry.course = course;
            }
            if let Some(due_date) = req.due_date {
                entry.due_date = due_date;
            }
            Ok::<_, AppError>(entry.clone())
        })
        .ok_or(AppError::NotFound)??;
    Ok(Json(updated))
}

async fn set_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PreferencesRequest>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(&id, |session| session.preferences = req.preferences)
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_study_days(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<DaysRequest>,
) -> Result<StatusCode, AppError> {
    let days = validate_selection(req.days, &WEEKDAYS)?;
    state
        .sessions
        .update(&id, |session| session.study_days = days)
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn set_study_times(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TimesRequest>,
) -> Result<StatusCode, AppError> {
    let times = validate_selection(req.times, &TIME_BLOCKS)?;
    state
        .sessions
        .update(&id, |session| session.study_times = times)
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Generate (or regenerate) the study plan. All-or-nothing: the stored plan
/// is only overwritten after the generation call succeeds, and no schedule
/// derivation happens for a failed attempt.
async fn generate_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Dashboard>, AppError> {
    let mut session = state.sessions.get(&id).ok_or(AppError::NotFound)?;
    if !session.is_complete() {
        return Err(AppError::IncompleteInput);
    }

    let prompt = build_plan_prompt(&session);
    let plan = state.generator.generate(&prompt).await?;

    state
        .sessions
        .update(&id, |s| s.study_plan = Some(plan.clone()))
        .ok_or(AppError::NotFound)?;

    session.study_plan = Some(plan);
    let today = Local::now().date_naive();
    Ok(Json(render_dashboard(&session, today).ok_or(AppError::NotFound)?))
}

async fn dashboard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Dashboard>, AppError> {
    let session = state.sessions.get(&id).ok_or(AppError::NotFound)?;
    let today = Local::now().date_naive();
    let dashboard = render_dashboard(&session, today).ok_or(AppError::NotFound)?;
    Ok(Json(dashboard))
}

async fn export_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = state.sessions.get(&id).ok_or(AppError::NotFound)?;
    let plan = session.study_plan.ok_or(AppError::NotFound)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"study_plan.txt\"",
            ),
        ],
        plan,
    )
        .into_response())
}

async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(&id, |session| session.reset())
        .ok_or(AppError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Pure view step: renders the dashboard from a state snapshot. `None` until
/// a plan has been generated.
fn render_dashboard(session: &PlannerSession, today: NaiveDate) -> Option<Dashboard> {
    let study_plan = session.study_plan.clone()?;

    let slots = derive_schedule(
        &session.course_names(),
        &session.study_days,
        &session.study_times,
        today,
    );
    let allocation = time_allocation(&slots);

    Some(Dashboard {
        deadlines: session
            .deadlines
            .iter()
            .map(|d| DeadlineRow {
                date: d.due_date.format("%Y-%m-%d").to_string(),
                course: d.course.clone(),
            })
            .collect(),
        study_plan,
        weekly_schedule: slots,
        time_allocation: allocation,
    })
}
