use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::checklist::{
    export_csv, item_views, ChecklistItemView, ChecklistProgress, ChecklistStore, KeyValueStore,
};
use super::costs::{CostEstimate, CostEstimator, CostLineItem};
use super::domain::DegreeLevel;
use super::tables::DEFAULT_SEMESTER;
use super::timeline::{Timeline, TimelineGenerator};
use crate::error::AppError;

/// Router exposing the estimator, timeline generator, and checklist store as JSON endpoints.
pub fn guide_router<S>(store: Arc<ChecklistStore<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/costs", get(costs_handler))
        .route("/api/v1/timeline", get(timeline_handler))
        .route(
            "/api/v1/timeline/:degree/semesters",
            get(semesters_handler),
        )
        .route("/api/v1/checklists/:degree", get(checklist_handler::<S>))
        .route(
            "/api/v1/checklists/:degree/items/:index",
            put(update_item_handler::<S>),
        )
        .route(
            "/api/v1/checklists/:degree/progress",
            get(progress_handler::<S>),
        )
        .route(
            "/api/v1/checklists/:degree/export",
            get(export_handler::<S>),
        )
        .with_state(store)
}

#[derive(Debug, Deserialize)]
pub struct CostQuery {
    #[serde(default)]
    pub program_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CostResponse {
    #[serde(flatten)]
    pub estimate: CostEstimate,
    pub formatted_total: String,
    pub line_items: Vec<CostLineItem>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SemestersResponse {
    pub degree: DegreeLevel,
    pub semesters: Vec<&'static str>,
    pub default_semester: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub degree: DegreeLevel,
    pub degree_label: &'static str,
    pub items: Vec<ChecklistItemView>,
    pub progress: ChecklistProgress,
    pub progress_label: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub degree: DegreeLevel,
    #[serde(flatten)]
    pub progress: ChecklistProgress,
    pub label: String,
}

impl ProgressResponse {
    fn new(degree: DegreeLevel, progress: ChecklistProgress) -> Self {
        Self {
            degree,
            label: progress.summary(),
            progress,
        }
    }
}

pub(crate) async fn costs_handler(Query(query): Query<CostQuery>) -> Result<Response, AppError> {
    let estimate = CostEstimator::estimate_selection(
        query.program_type.as_deref(),
        query.location.as_deref(),
    )?;

    let Some(estimate) = estimate else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    let body = CostResponse {
        formatted_total: estimate.formatted_total(),
        line_items: estimate.line_items(),
        estimate,
    };
    Ok((StatusCode::OK, Json(body)).into_response())
}

/// A missing degree is reported as an invalid selection rather than a query rejection.
pub(crate) async fn timeline_handler(
    Query(query): Query<TimelineQuery>,
) -> Result<Json<Timeline>, AppError> {
    let degree = query.degree.as_deref().unwrap_or_default();
    let semester = query.semester.as_deref().unwrap_or(DEFAULT_SEMESTER);
    let timeline = TimelineGenerator::generate_selection(degree, semester)?;
    Ok(Json(timeline))
}

pub(crate) async fn semesters_handler(
    Path(degree): Path<String>,
) -> Result<Json<SemestersResponse>, AppError> {
    let degree: DegreeLevel = degree.parse()?;
    Ok(Json(SemestersResponse {
        degree,
        semesters: TimelineGenerator::semesters(degree),
        default_semester: DEFAULT_SEMESTER,
    }))
}

pub(crate) async fn checklist_handler<S>(
    State(store): State<Arc<ChecklistStore<S>>>,
    Path(degree): Path<String>,
) -> Result<Json<ChecklistResponse>, AppError>
where
    S: KeyValueStore + 'static,
{
    let degree: DegreeLevel = degree.parse()?;

    let state = store.load(degree);
    let progress = ChecklistProgress::for_degree(degree, &state);
    Ok(Json(ChecklistResponse {
        degree,
        degree_label: degree.label(),
        items: item_views(degree, &state),
        progress_label: progress.summary(),
        progress,
    }))
}

pub(crate) async fn update_item_handler<S>(
    State(store): State<Arc<ChecklistStore<S>>>,
    Path((degree, index)): Path<(String, usize)>,
    Json(request): Json<UpdateItemRequest>,
) -> Result<Json<ProgressResponse>, AppError>
where
    S: KeyValueStore + 'static,
{
    let degree: DegreeLevel = degree.parse()?;

    let state = store.set_item(degree, index, request.completed)?;
    let progress = ChecklistProgress::for_degree(degree, &state);
    Ok(Json(ProgressResponse::new(degree, progress)))
}

pub(crate) async fn progress_handler<S>(
    State(store): State<Arc<ChecklistStore<S>>>,
    Path(degree): Path<String>,
) -> Result<Json<ProgressResponse>, AppError>
where
    S: KeyValueStore + 'static,
{
    let degree: DegreeLevel = degree.parse()?;
    Ok(Json(ProgressResponse::new(degree, store.progress(degree))))
}

pub(crate) async fn export_handler<S>(
    State(store): State<Arc<ChecklistStore<S>>>,
    Path(degree): Path<String>,
) -> Result<Response, AppError>
where
    S: KeyValueStore + 'static,
{
    let degree: DegreeLevel = degree.parse()?;

    let mut buffer = Vec::new();
    export_csv(store.as_ref(), degree, &mut buffer)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        buffer,
    )
        .into_response())
}
