// Race domain models
use super::metrics::Utilization;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Open/closed issue split shown on race cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusPercentage {
    pub open: f64,
    pub closed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub race_id: Option<i64>,
    pub race_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Absent while the race is still running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub ideal_hours: f64,
    pub logged_hours: f64,
    /// Utilization as reported by the backend, when it reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_utilization: Option<f64>,
    pub total_issues: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_checklist: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complete_checklist: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_percentage: Option<StatusPercentage>,
}

impl RaceRecord {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// "Race — Project" when a project is known, otherwise just the race name
    pub fn label(&self) -> String {
        match self.project_name.as_deref() {
            Some(project) if !project.is_empty() => format!("{} — {}", self.race_name, project),
            _ => self.race_name.clone(),
        }
    }
}

/// Issue status counters reported for a single race
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueStatusCounts {
    pub initiated: i64,
    pub active: i64,
    pub finished: i64,
    pub achieved: i64,
    pub failed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceDetail {
    #[serde(flatten)]
    pub race: RaceRecord,
    pub status: IssueStatusCounts,
    pub utilization: Utilization,
}

/// A race table row with its utilization resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRow {
    #[serde(flatten)]
    pub race: RaceRecord,
    pub label: String,
    pub ongoing: bool,
    pub logged_label: String,
    pub utilization: Utilization,
}
