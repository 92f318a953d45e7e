// Performance service - Fetch, normalize, derive and order data for each view
use crate::application::deriver::{
    derive_daily_donut, derive_race_breakdown, race_row_utilization,
};
use crate::application::normalizer::{
    normalize_days, normalize_members, normalize_race_detail, normalize_races, normalize_rankings,
    normalize_total_users, normalize_trend, normalize_users,
};
use crate::application::performance_backend::{BackendError, PerformanceBackend};
use crate::application::sequencer::{find_trend_peak, rank_members, rank_users};
use crate::domain::daily::{DayRecord, DaySummary};
use crate::domain::dashboard::{Dashboard, DailyPerformance};
use crate::domain::member::MemberStatusBar;
use crate::domain::metrics::format_hours_decimal;
use crate::domain::race::{RaceDetail, RaceRecord, RaceRow};
use crate::domain::ranking::{RaceTrend, RankedUser, TrendPoint};
use crate::domain::user::{User, UserFilter, UserTotal};
use crate::infrastructure::config::ViewSettings;
use std::sync::Arc;

#[derive(Clone)]
pub struct PerformanceService {
    backend: Arc<dyn PerformanceBackend>,
    views: ViewSettings,
}

impl PerformanceService {
    pub fn new(backend: Arc<dyn PerformanceBackend>, views: ViewSettings) -> Self {
        Self { backend, views }
    }

    /// Race summaries from the card endpoint, falling back to the full race
    /// table when the card endpoint fails.
    pub async fn race_summaries(&self, limit: Option<usize>) -> Result<Vec<RaceRecord>, BackendError> {
        let limit = limit.unwrap_or(self.views.race_card_limit);
        let raw = match self.backend.race_cards(limit).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Race card endpoint failed ({}), falling back to race table", e);
                self.backend.race_table().await?
            }
        };

        let races = normalize_races(&raw);
        tracing::debug!("Normalized {} race summaries", races.len());
        Ok(races)
    }

    pub async fn race_table(&self) -> Result<Vec<RaceRow>, BackendError> {
        let raw = self.backend.race_table().await?;
        Ok(normalize_races(&raw).into_iter().map(race_row).collect())
    }

    pub async fn race_detail(&self, race_id: i64) -> Result<RaceDetail, BackendError> {
        let raw = self.backend.race_detail(race_id).await?;
        let (race, status) = normalize_race_detail(&raw);
        let utilization = race_row_utilization(&race);
        Ok(RaceDetail {
            race,
            status,
            utilization,
        })
    }

    pub async fn members_status(&self, race_id: i64) -> Result<Vec<MemberStatusBar>, BackendError> {
        let raw = self.backend.members_status(race_id).await?;
        let members = normalize_members(&raw);
        tracing::debug!("Race {} has {} member status rows", race_id, members.len());
        Ok(rank_members(members, self.views.member_limit))
    }

    pub async fn ranking(&self, race_id: i64) -> Result<Vec<RankedUser>, BackendError> {
        let raw = self.backend.ranking(race_id).await?;
        Ok(rank_users(&normalize_rankings(&raw)))
    }

    pub async fn race_trend(&self, year: Option<i32>, month: Option<u32>) -> Result<RaceTrend, BackendError> {
        let raw = self.backend.race_trend(year, month).await?;
        let points = normalize_trend(&raw);
        let peak_index = find_trend_peak(&points);
        let performance_series = points.iter().map(TrendPoint::chart_performance).collect();
        Ok(RaceTrend {
            points,
            performance_series,
            peak_index,
        })
    }

    pub async fn user_races(&self, user_id: i64) -> Result<Vec<RaceRow>, BackendError> {
        let raw = self.backend.user_race_table(user_id).await?;
        Ok(normalize_races(&raw).into_iter().map(race_row).collect())
    }

    /// Day-by-day view of one user's race. `day` picks the day by position and
    /// is clamped to the last day available. The race row is optional: when the
    /// user's race table cannot be loaded the days are still shown, measured
    /// against an ideal of zero.
    pub async fn daily_performance(
        &self,
        user_id: i64,
        race_id: i64,
        day: Option<usize>,
    ) -> Result<DailyPerformance, BackendError> {
        let (races_raw, daily_raw) = futures::join!(
            self.backend.user_race_table(user_id),
            self.backend.daily(user_id, race_id)
        );
        let days = normalize_days(&daily_raw?);

        let race = match races_raw {
            Ok(raw) => normalize_races(&raw)
                .into_iter()
                .find(|r| r.race_id == Some(race_id))
                .map(race_row),
            Err(e) => {
                tracing::warn!(
                    "Race table for user {} unavailable ({}), showing daily data without race row",
                    user_id,
                    e
                );
                None
            }
        };

        let ideal_hours = race.as_ref().map(|r| r.race.ideal_hours).unwrap_or(0.0);
        let breakdown = derive_race_breakdown(&days, ideal_hours);

        let selected_index = select_day(&days, day);
        let selected_day = selected_index.map(|idx| days[idx].clone());
        let donut = selected_day
            .as_ref()
            .map(derive_daily_donut)
            .unwrap_or_default();

        Ok(DailyPerformance {
            race,
            days: days
                .iter()
                .enumerate()
                .map(|(idx, d)| DaySummary::new(idx, d))
                .collect(),
            selected_index,
            selected_day,
            donut,
            breakdown,
        })
    }

    pub async fn users(&self, filter: &UserFilter) -> Result<Vec<User>, BackendError> {
        let raw = self.backend.users(filter).await?;
        Ok(normalize_users(&raw))
    }

    pub async fn assignees(&self) -> Result<Vec<User>, BackendError> {
        let raw = self.backend.assignees().await?;
        Ok(normalize_users(&raw))
    }

    pub async fn total_users(&self) -> Result<UserTotal, BackendError> {
        let raw = self.backend.total_users().await?;
        Ok(UserTotal {
            total_users: normalize_total_users(&raw),
        })
    }

    pub async fn dashboard(&self) -> Result<Dashboard, BackendError> {
        let (total, races) = futures::try_join!(self.total_users(), self.race_summaries(None))?;
        Ok(Dashboard::new(total.total_users, races))
    }
}

fn race_row(race: RaceRecord) -> RaceRow {
    let utilization = race_row_utilization(&race);
    RaceRow {
        label: race.label(),
        ongoing: race.is_ongoing(),
        logged_label: format_hours_decimal(Some(race.logged_hours)),
        utilization,
        race,
    }
}

fn select_day(days: &[DayRecord], requested: Option<usize>) -> Option<usize> {
    let last = days.len().checked_sub(1)?;
    Some(requested.unwrap_or(0).min(last))
}
