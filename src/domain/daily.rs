// Daily time tracking domain models
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Trimmed label; `None` when the backend sent nothing usable
    #[serde(rename = "activity", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ActivityRecord {
    /// Label used for grouping, with the caller's convention for unlabeled work
    pub fn group_label<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub ideal_daily_hours: f64,
    pub total_hours: f64,
    pub activities: Vec<ActivityRecord>,
}

impl DayRecord {
    pub fn activity_hours(&self) -> f64 {
        self.activities.iter().map(|a| a.hours).sum()
    }
}

/// One entry of the day picker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub weekday: Option<String>,
    pub total_hours: f64,
}

impl DaySummary {
    pub fn new(index: usize, day: &DayRecord) -> Self {
        Self {
            index,
            date: day.date,
            weekday: day.date.map(|d| weekday_name(d.weekday()).to_string()),
            total_hours: day.total_hours,
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}
