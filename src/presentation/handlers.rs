// HTTP request handlers
use crate::domain::dashboard::{Dashboard, DailyPerformance};
use crate::domain::member::MemberStatusBar;
use crate::domain::race::{RaceDetail, RaceRecord, RaceRow};
use crate::domain::ranking::{RaceTrend, RankedUser};
use crate::domain::user::{User, UserFilter, UserTotal};
use crate::presentation::app_state::AppState;
use crate::presentation::error::{ApiError, ApiResult};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct TrendQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Deserialize)]
pub struct DayQuery {
    pub day: Option<usize>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Total users and race cards for the landing page
pub async fn dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Dashboard> {
    Ok(Json(state.performance_service.dashboard().await?))
}

pub async fn list_races(
    Query(query): Query<LimitQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RaceRecord>> {
    let races = state.performance_service.race_summaries(query.limit).await?;
    Ok(Json(races))
}

pub async fn race_table(State(state): State<Arc<AppState>>) -> ApiResult<Vec<RaceRow>> {
    Ok(Json(state.performance_service.race_table().await?))
}

pub async fn race_detail(
    Path(race_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<RaceDetail> {
    Ok(Json(state.performance_service.race_detail(race_id).await?))
}

pub async fn race_members(
    Path(race_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<MemberStatusBar>> {
    Ok(Json(state.performance_service.members_status(race_id).await?))
}

pub async fn race_ranking(
    Path(race_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RankedUser>> {
    Ok(Json(state.performance_service.ranking(race_id).await?))
}

pub async fn race_trend(
    Query(query): Query<TrendQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<RaceTrend> {
    if let Some(month) = query.month {
        if !(1..=12).contains(&month) {
            return Err(ApiError::BadRequest(format!(
                "Month must be between 1 and 12, got {}",
                month
            )));
        }
    }

    let trend = state
        .performance_service
        .race_trend(query.year, query.month)
        .await?;
    Ok(Json(trend))
}

pub async fn list_users(
    Query(filter): Query<UserFilter>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<User>> {
    Ok(Json(state.performance_service.users(&filter).await?))
}

pub async fn total_users(State(state): State<Arc<AppState>>) -> ApiResult<UserTotal> {
    Ok(Json(state.performance_service.total_users().await?))
}

pub async fn list_assignees(State(state): State<Arc<AppState>>) -> ApiResult<Vec<User>> {
    Ok(Json(state.performance_service.assignees().await?))
}

pub async fn user_races(
    Path(user_id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Vec<RaceRow>> {
    Ok(Json(state.performance_service.user_races(user_id).await?))
}

/// Daily breakdown for one user's race; `?day=` selects the day by position
pub async fn daily_performance(
    Path((user_id, race_id)): Path<(i64, i64)>,
    Query(query): Query<DayQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<DailyPerformance> {
    let view = state
        .performance_service
        .daily_performance(user_id, race_id, query.day)
        .await?;
    Ok(Json(view))
}
