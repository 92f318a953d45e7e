// Dashboard view models
use super::daily::{DayRecord, DaySummary};
use super::metrics::{DailyDonut, RaceActivityBreakdown};
use super::race::{RaceRecord, RaceRow};
use serde::Serialize;

/// Landing page: user count next to the latest race cards
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_users: i64,
    pub races: Vec<RaceRecord>,
}

impl Dashboard {
    pub fn new(total_users: i64, races: Vec<RaceRecord>) -> Self {
        Self { total_users, races }
    }
}

/// One user's race, broken down per day and across the whole race
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPerformance {
    pub race: Option<RaceRow>,
    pub days: Vec<DaySummary>,
    pub selected_index: Option<usize>,
    pub selected_day: Option<DayRecord>,
    pub donut: DailyDonut,
    pub breakdown: RaceActivityBreakdown,
}
