// Payload normalizer - Reconciles backend response shapes into canonical records
//
// Every logical field is read through a key table: the first key that is present
// and not null wins. The canonical camelCase spelling comes first in each table,
// so normalizing an already-canonical record is a no-op.
use crate::domain::daily::{ActivityRecord, DayRecord};
use crate::domain::member::MemberStatus;
use crate::domain::race::{IssueStatusCounts, RaceRecord, StatusPercentage};
use crate::domain::ranking::{RankingRecord, TrendPoint};
use crate::domain::user::User;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

pub const DEFAULT_WRAPPERS: &[&str] = &["items", "data"];
pub const DAILY_WRAPPERS: &[&str] = &["daily", "items", "data"];
pub const MEMBER_WRAPPERS: &[&str] = &["members", "users", "items", "data"];

pub mod fields {
    pub const RACE_ID: &[&str] = &["raceId", "race_id", "id", "versionId"];
    pub const RACE_NAME: &[&str] = &["raceName", "race_name", "name", "version_name", "race"];
    pub const PROJECT_NAME: &[&str] = &["projectName", "project_name", "project"];
    pub const START_DATE: &[&str] = &["startDate", "start_date", "raceStart"];
    pub const END_DATE: &[&str] = &["endDate", "end_date", "raceDue"];
    pub const IDEAL_HOURS: &[&str] = &["idealHours", "ideal_hours"];
    pub const LOGGED_HOURS: &[&str] = &["loggedHours", "logged_hours"];
    pub const UTILIZATION: &[&str] = &[
        "timeUtilization",
        "timeUtilizationPercentage",
        "utilizationPercent",
        "utilization_percent",
    ];
    pub const TOTAL_ISSUES: &[&str] = &["totalIssues", "total_issues", "totalIssue"];
    pub const TOTAL_CHECKLIST: &[&str] = &["totalChecklist", "total_checklist"];
    pub const COMPLETE_CHECKLIST: &[&str] =
        &["completeChecklist", "completedChecklist", "complete_checklist"];
    pub const STATUS_PERCENTAGE: &[&str] = &["statusPercentage", "status_percentage"];

    pub const DAY_DATE: &[&str] = &["date"];
    pub const IDEAL_DAILY_HOURS: &[&str] = &["idealDailyHours", "ideal_daily_hours", "idealHours"];
    pub const TOTAL_HOURS: &[&str] = &["totalHours", "total_hours"];
    pub const ACTIVITIES: &[&str] = &["activities"];
    pub const ACTIVITY_LABEL: &[&str] = &["activity", "activityName", "activity_name"];
    pub const HOURS: &[&str] = &["hours"];
    pub const SUBJECT: &[&str] = &["subject"];
    pub const COMMENT: &[&str] = &["comment", "comments"];

    pub const USER_ID: &[&str] = &["userId", "user_id"];
    pub const USER_NAME: &[&str] = &["userName", "user_name", "fullname"];
    pub const FIRST_NAME: &[&str] = &["firstname", "firstName"];
    pub const LAST_NAME: &[&str] = &["lastname", "lastName"];
    pub const RQS: &[&str] = &["rqs", "resultQualityScore"];
    pub const WPS: &[&str] = &["wps", "workProgressScore"];
    pub const FPS: &[&str] = &["fps", "failurePenaltyScore"];
    pub const TUS: &[&str] = &["tus", "timeUtilizationScore"];
    pub const PERFORMANCE: &[&str] = &["performance", "performanceScore", "performanceKinerja"];
    pub const TREND_RQS: &[&str] = &["rqs", "resultQualityAvg"];
    pub const TREND_TUS: &[&str] = &["tus", "timeUtilizationAvg"];

    pub const ACCOUNT_ID: &[&str] = &["userId", "user_id", "id"];
    pub const ACCOUNT_NAME: &[&str] = &["username", "userName", "name", "fullname"];
    pub const ACCOUNT_STATUS: &[&str] = &["status"];
    pub const CREATED_AT: &[&str] = &["createdAt", "created_at"];
    pub const TOTAL_USERS: &[&str] = &["totalUsers", "total_users"];
}

const DEFAULT_TREND_NAME: &str = "Race";
const DEFAULT_MEMBER_NAME: &str = "Unassigned";

/// Strict numeric read: finite numbers and numeric strings only
pub fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

/// Total numeric coercion: anything that is not a usable number reads as 0
pub fn to_number(value: &Value) -> f64 {
    numeric(value).unwrap_or(0.0)
}

/// Extract the record sequence out of whatever shape the backend returned.
///
/// A bare array is used as is; an object exposing an array under one of
/// `wrappers` (checked in order) yields that array; any other object yields its
/// values in key order. Everything else is an empty sequence.
pub fn to_sequence<'a>(raw: &'a Value, wrappers: &[&str]) -> Vec<&'a Value> {
    match raw {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            let wrapped = wrappers
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_array));
            match wrapped {
                Some(items) => items.iter().collect(),
                None => map.values().collect(),
            }
        }
        _ => Vec::new(),
    }
}

/// First candidate key that is present and not null
pub fn first_defined<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn records<'a>(raw: &'a Value, wrappers: &[&str]) -> impl Iterator<Item = Fields<'a>> {
    to_sequence(raw, wrappers)
        .into_iter()
        .filter_map(Value::as_object)
        .map(Fields)
}

/// Typed view over one backend object
#[derive(Clone, Copy)]
struct Fields<'a>(&'a Map<String, Value>);

impl<'a> Fields<'a> {
    fn get(&self, keys: &[&str]) -> Option<&'a Value> {
        first_defined(self.0, keys)
    }

    fn number(&self, keys: &[&str]) -> f64 {
        self.get(keys).map(to_number).unwrap_or(0.0)
    }

    fn opt_number(&self, keys: &[&str]) -> Option<f64> {
        self.get(keys).and_then(numeric)
    }

    fn integer(&self, keys: &[&str]) -> i64 {
        self.number(keys).trunc() as i64
    }

    fn opt_integer(&self, keys: &[&str]) -> Option<i64> {
        self.opt_number(keys).map(|n| n.trunc() as i64)
    }

    fn text(&self, keys: &[&str]) -> Option<String> {
        match self.get(keys)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn date(&self, keys: &[&str]) -> Option<NaiveDate> {
        self.get(keys).and_then(Value::as_str).and_then(parse_date)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|ts| ts.date())
}

fn race_from(f: Fields<'_>) -> RaceRecord {
    let status_percentage = f.get(fields::STATUS_PERCENTAGE).and_then(Value::as_object).map(|split| {
        let split = Fields(split);
        StatusPercentage {
            open: split.number(&["open"]),
            closed: split.number(&["closed"]),
        }
    });

    RaceRecord {
        race_id: f.opt_integer(fields::RACE_ID),
        race_name: f.text(fields::RACE_NAME).unwrap_or_default(),
        project_name: f.text(fields::PROJECT_NAME),
        start_date: f.date(fields::START_DATE),
        end_date: f.date(fields::END_DATE),
        ideal_hours: f.number(fields::IDEAL_HOURS),
        logged_hours: f.number(fields::LOGGED_HOURS),
        time_utilization: f.opt_number(fields::UTILIZATION),
        total_issues: f.integer(fields::TOTAL_ISSUES),
        total_checklist: f.opt_integer(fields::TOTAL_CHECKLIST),
        complete_checklist: f.opt_integer(fields::COMPLETE_CHECKLIST),
        status_percentage,
    }
}

pub fn normalize_races(raw: &Value) -> Vec<RaceRecord> {
    records(raw, DEFAULT_WRAPPERS).map(race_from).collect()
}

/// Single race object, optionally wrapped in `data`
pub fn normalize_race_detail(raw: &Value) -> (RaceRecord, IssueStatusCounts) {
    let object = raw
        .get("data")
        .and_then(Value::as_object)
        .or_else(|| raw.as_object());

    match object {
        Some(object) => {
            let f = Fields(object);
            let status = IssueStatusCounts {
                initiated: f.integer(&["initiated"]),
                active: f.integer(&["active"]),
                finished: f.integer(&["finished"]),
                achieved: f.integer(&["achieved"]),
                failed: f.integer(&["failed"]),
            };
            (race_from(f), status)
        }
        None => (RaceRecord::default(), IssueStatusCounts::default()),
    }
}

fn activity_from(f: Fields<'_>) -> ActivityRecord {
    let label = f
        .text(fields::ACTIVITY_LABEL)
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());

    ActivityRecord {
        label,
        hours: f.number(fields::HOURS),
        subject: f.text(fields::SUBJECT),
        comment: f.text(fields::COMMENT),
    }
}

fn day_from(f: Fields<'_>) -> DayRecord {
    let activities: Vec<ActivityRecord> = f
        .get(fields::ACTIVITIES)
        .map(|raw| records(raw, DEFAULT_WRAPPERS).map(activity_from).collect())
        .unwrap_or_default();

    let mut day = DayRecord {
        date: f.date(fields::DAY_DATE),
        ideal_daily_hours: f.number(fields::IDEAL_DAILY_HOURS),
        total_hours: 0.0,
        activities,
    };
    day.total_hours = f
        .opt_number(fields::TOTAL_HOURS)
        .unwrap_or_else(|| day.activity_hours());
    day
}

/// Bare array of days, or an object carrying them under `daily`.
/// An object without a wrapped array has no days; its other fields are not days.
pub fn normalize_days(raw: &Value) -> Vec<DayRecord> {
    if let Value::Object(map) = raw {
        let wrapped = DAILY_WRAPPERS
            .iter()
            .any(|key| map.get(*key).is_some_and(Value::is_array));
        if !wrapped {
            return Vec::new();
        }
    }
    records(raw, DAILY_WRAPPERS).map(day_from).collect()
}

fn user_name_from(f: Fields<'_>) -> String {
    f.text(fields::USER_NAME).unwrap_or_else(|| {
        let first = f.text(fields::FIRST_NAME).unwrap_or_default();
        let last = f.text(fields::LAST_NAME).unwrap_or_default();
        format!("{} {}", first, last).trim().to_string()
    })
}

fn ranking_from(f: Fields<'_>) -> RankingRecord {
    RankingRecord {
        user_id: f.opt_integer(fields::USER_ID),
        user_name: user_name_from(f),
        total_issues: f.integer(fields::TOTAL_ISSUES),
        logged_hours: f.number(fields::LOGGED_HOURS),
        rqs: f.number(fields::RQS),
        wps: f.number(fields::WPS),
        fps: f.number(fields::FPS),
        tus: f.number(fields::TUS),
        performance: f.number(fields::PERFORMANCE),
    }
}

pub fn normalize_rankings(raw: &Value) -> Vec<RankingRecord> {
    records(raw, DEFAULT_WRAPPERS).map(ranking_from).collect()
}

fn trend_from(f: Fields<'_>) -> TrendPoint {
    TrendPoint {
        race_name: f
            .text(fields::RACE_NAME)
            .unwrap_or_else(|| DEFAULT_TREND_NAME.to_string()),
        rqs: f.number(fields::TREND_RQS),
        tus: f.number(fields::TREND_TUS),
        performance: f.opt_number(fields::PERFORMANCE),
    }
}

pub fn normalize_trend(raw: &Value) -> Vec<TrendPoint> {
    records(raw, DEFAULT_WRAPPERS).map(trend_from).collect()
}

fn member_from(f: Fields<'_>) -> MemberStatus {
    MemberStatus {
        user_name: f
            .text(fields::USER_NAME)
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MEMBER_NAME.to_string()),
        initiated: f.integer(&["initiated"]),
        todo: f.integer(&["todo"]),
        active: f.integer(&["active"]),
        hold: f.integer(&["hold"]),
        achieved: f.integer(&["achieved"]),
        failed: f.integer(&["failed"]),
        canceled: f.integer(&["canceled"]),
        finished: f.integer(&["finished"]),
    }
}

pub fn normalize_members(raw: &Value) -> Vec<MemberStatus> {
    records(raw, MEMBER_WRAPPERS).map(member_from).collect()
}

fn user_from(f: Fields<'_>) -> User {
    User {
        user_id: f.opt_integer(fields::ACCOUNT_ID),
        username: f.text(fields::ACCOUNT_NAME).unwrap_or_default(),
        status: f.text(fields::ACCOUNT_STATUS),
        created_at: f.text(fields::CREATED_AT),
    }
}

pub fn normalize_users(raw: &Value) -> Vec<User> {
    records(raw, DEFAULT_WRAPPERS).map(user_from).collect()
}

/// `{"totalUsers": n}` or a bare number
pub fn normalize_total_users(raw: &Value) -> i64 {
    let total = match raw.as_object() {
        Some(object) => Fields(object).number(fields::TOTAL_USERS),
        None => to_number(raw),
    };
    total.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(4.5)), 4.5);
        assert_eq!(to_number(&json!(" 2.25 ")), 2.25);
        assert_eq!(to_number(&json!("abc")), 0.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 0.0);
        assert_eq!(to_number(&json!([1])), 0.0);
        assert_eq!(to_number(&json!("NaN")), 0.0);
    }

    #[test]
    fn test_to_sequence_shapes() {
        let bare = json!([{"a": 1}, {"a": 2}]);
        let items = json!({"items": [{"a": 1}, {"a": 2}]});
        let data = json!({"data": [{"a": 1}, {"a": 2}]});
        let keyed = json!({"first": {"a": 1}, "second": {"a": 2}});

        for raw in [&bare, &items, &data, &keyed] {
            let seq = to_sequence(raw, DEFAULT_WRAPPERS);
            assert_eq!(seq.len(), 2, "shape {}", raw);
            assert_eq!(seq[0]["a"], 1);
            assert_eq!(seq[1]["a"], 2);
        }

        assert!(to_sequence(&json!(null), DEFAULT_WRAPPERS).is_empty());
        assert!(to_sequence(&json!(42), DEFAULT_WRAPPERS).is_empty());
        assert!(to_sequence(&json!("text"), DEFAULT_WRAPPERS).is_empty());
    }

    #[test]
    fn test_to_sequence_skips_non_array_wrapper() {
        let raw = json!({"items": "nope", "data": [{"a": 1}]});
        let seq = to_sequence(&raw, DEFAULT_WRAPPERS);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0]["a"], 1);
    }

    #[test]
    fn test_keyed_object_keeps_key_order() {
        let raw = json!({"z": {"raceName": "Z"}, "a": {"raceName": "A"}});
        let races = normalize_races(&raw);
        let names: Vec<&str> = races.iter().map(|r| r.race_name.as_str()).collect();
        assert_eq!(names, vec!["Z", "A"]);
    }

    #[test]
    fn test_first_defined_skips_null() {
        let raw = json!({"raceId": null, "race_id": 7, "id": 9});
        let object = raw.as_object().unwrap();
        assert_eq!(first_defined(object, fields::RACE_ID), Some(&json!(7)));
        assert_eq!(first_defined(object, &["missing"]), None);
    }

    #[test]
    fn test_race_field_reconciliation() {
        let raw = json!([
            {"raceId": 1, "raceName": "Alpha", "projectName": "P1", "idealHours": 40},
            {"race_id": 2, "race_name": "Beta", "project_name": "P2", "ideal_hours": "32.5"},
            {"id": 3, "version_name": "Gamma", "project": "P3", "start_date": "2025-01-06T08:00:00"},
            {"versionId": 4, "name": "Delta", "endDate": "2025-02-01T00:00:00Z"}
        ]);
        let races = normalize_races(&raw);

        assert_eq!(races.len(), 4);
        assert_eq!(races[0].race_id, Some(1));
        assert_eq!(races[0].race_name, "Alpha");
        assert_eq!(races[0].ideal_hours, 40.0);
        assert_eq!(races[1].race_id, Some(2));
        assert_eq!(races[1].project_name.as_deref(), Some("P2"));
        assert_eq!(races[1].ideal_hours, 32.5);
        assert_eq!(races[2].race_name, "Gamma");
        assert_eq!(races[2].start_date, NaiveDate::from_ymd_opt(2025, 1, 6));
        assert!(races[2].is_ongoing());
        assert_eq!(races[3].race_id, Some(4));
        assert_eq!(races[3].end_date, NaiveDate::from_ymd_opt(2025, 2, 1));
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let raw = json!([{"raceName": "Alpha"}, 5, null, "x"]);
        assert_eq!(normalize_races(&raw).len(), 1);
        assert!(normalize_races(&json!(null)).is_empty());
    }

    #[test]
    fn test_normalizing_canonical_race_is_idempotent() {
        let raw = json!([{
            "race_id": "12",
            "name": "Sprint",
            "project": "Apollo",
            "raceStart": "2025-03-03",
            "ideal_hours": 80,
            "logged_hours": "61.5",
            "utilization_percent": 77,
            "total_issues": 9,
            "completedChecklist": 3,
            "status_percentage": {"open": 40, "closed": 60}
        }]);
        let first = normalize_races(&raw);
        let canonical = serde_json::to_value(&first).unwrap();
        let second = normalize_races(&canonical);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalizing_canonical_day_and_ranking_is_idempotent() {
        let days = normalize_days(&json!({"daily": [{
            "date": "2025-01-06",
            "ideal_daily_hours": 8,
            "activities": [{"activity": " Design ", "hours": "2", "subject": "Login"}]
        }]}));
        let again = normalize_days(&serde_json::to_value(&days).unwrap());
        assert_eq!(days, again);

        let ranking = normalize_rankings(&json!([{"fullname": "Sari", "resultQualityScore": 3, "performanceKinerja": 81.5}]));
        let again = normalize_rankings(&serde_json::to_value(&ranking).unwrap());
        assert_eq!(ranking, again);
    }

    #[test]
    fn test_normalizing_canonical_trend_members_and_users_is_idempotent() {
        let points = normalize_trend(&json!([
            {"version_name": "R1", "resultQualityAvg": "2.5", "timeUtilizationAvg": 4, "performanceScore": 70},
            {"name": "R2", "performance": null}
        ]));
        let again = normalize_trend(&serde_json::to_value(&points).unwrap());
        assert_eq!(points, again);

        let members = normalize_members(&json!({"users": [
            {"user_name": "Dewi Lestari", "todo": "2", "finished": 4, "canceled": 1},
            {"hold": 3}
        ]}));
        let again = normalize_members(&serde_json::to_value(&members).unwrap());
        assert_eq!(members, again);

        let users = normalize_users(&json!({"data": [
            {"id": "5", "name": "eka", "status": "active", "created_at": "2025-01-02T03:04:05Z"},
            {"user_id": 6, "fullname": "Fajar"}
        ]}));
        let again = normalize_users(&serde_json::to_value(&users).unwrap());
        assert_eq!(users, again);
    }

    #[test]
    fn test_race_table_row_shape() {
        let races = normalize_races(&json!([{
            "raceId": 1,
            "raceName": "Sprint 4",
            "raceStart": "2025-02-03",
            "raceDue": "2025-02-14",
            "idealHours": 40,
            "loggedHours": 30,
            "timeUtilizationPercentage": 81.25
        }]));

        assert_eq!(races[0].start_date, NaiveDate::from_ymd_opt(2025, 2, 3));
        assert_eq!(races[0].end_date, NaiveDate::from_ymd_opt(2025, 2, 14));
        assert_eq!(races[0].time_utilization, Some(81.25));
        assert_eq!(
            crate::application::deriver::race_row_utilization(&races[0]).percentage,
            81.25
        );
    }

    #[test]
    fn test_day_total_hours_falls_back_to_activity_sum() {
        let days = normalize_days(&json!([
            {"date": "2025-01-06", "idealDailyHours": 8, "activities": [{"activity": "Dev", "hours": 3}, {"hours": "1.5"}]},
            {"date": "2025-01-07", "totalHours": 6, "activities": []}
        ]));

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].total_hours, 4.5);
        assert_eq!(days[0].activities[1].label, None);
        assert_eq!(days[1].total_hours, 6.0);
        assert_eq!(days[1].ideal_daily_hours, 0.0);
    }

    #[test]
    fn test_daily_wrapper_shapes() {
        let bare = json!([{"date": "2025-01-06"}]);
        let wrapped = json!({"userId": 3, "raceId": 9, "daily": [{"date": "2025-01-06"}]});
        assert_eq!(normalize_days(&bare).len(), 1);
        assert_eq!(normalize_days(&wrapped).len(), 1);
        assert!(normalize_days(&json!({"userId": 3, "daily": null})).is_empty());
    }

    #[test]
    fn test_daily_object_without_days_is_empty() {
        let raw = json!({
            "user": {"userId": 3, "userName": "Andi"},
            "race": {"raceId": 9, "idealHours": 40},
            "daily": null
        });
        assert!(normalize_days(&raw).is_empty());
        assert!(normalize_days(&json!({"user": {"userId": 3}})).is_empty());
    }

    #[test]
    fn test_activity_label_trimmed_and_blank_dropped() {
        let days = normalize_days(&json!([{"activities": [
            {"activity": " Design ", "hours": 1},
            {"activity": "   ", "hours": 1},
            {"activityName": "Review", "hours": "x"}
        ]}]));
        let acts = &days[0].activities;
        assert_eq!(acts[0].label.as_deref(), Some("Design"));
        assert_eq!(acts[1].label, None);
        assert_eq!(acts[2].label.as_deref(), Some("Review"));
        assert_eq!(acts[2].hours, 0.0);
    }

    #[test]
    fn test_ranking_name_fallbacks() {
        let rows = normalize_rankings(&json!({"data": [
            {"userName": "Andi", "performance": 10},
            {"firstname": "Budi", "lastname": "Santoso", "performanceScore": "22"},
            {"firstname": "Citra", "tus": 4}
        ]}));
        assert_eq!(rows[0].user_name, "Andi");
        assert_eq!(rows[1].user_name, "Budi Santoso");
        assert_eq!(rows[1].performance, 22.0);
        assert_eq!(rows[2].user_name, "Citra");
        assert_eq!(rows[2].tus, 4.0);
        assert_eq!(rows[2].performance, 0.0);
    }

    #[test]
    fn test_trend_keeps_missing_performance_absent() {
        let points = normalize_trend(&json!([
            {"version_name": "R1", "resultQualityAvg": 2, "performance": 5},
            {"performance": "n/a"}
        ]));
        assert_eq!(points[0].race_name, "R1");
        assert_eq!(points[0].rqs, 2.0);
        assert_eq!(points[0].performance, Some(5.0));
        assert_eq!(points[1].race_name, "Race");
        assert_eq!(points[1].performance, None);
    }

    #[test]
    fn test_members_and_users() {
        let members = normalize_members(&json!({"members": [
            {"user_name": "Dewi", "todo": 2, "failed": "1"},
            {"initiated": 1}
        ]}));
        assert_eq!(members[0].user_name, "Dewi");
        assert_eq!(members[0].total(), 3);
        assert_eq!(members[1].user_name, "Unassigned");

        let users = normalize_users(&json!([{"id": 5, "username": "eka", "status": "active"}]));
        assert_eq!(users[0].user_id, Some(5));
        assert_eq!(users[0].username, "eka");

        assert_eq!(normalize_total_users(&json!({"totalUsers": 42})), 42);
        assert_eq!(normalize_total_users(&json!(17)), 17);
        assert_eq!(normalize_total_users(&json!(null)), 0);
    }

    #[test]
    fn test_race_detail() {
        let (race, status) = normalize_race_detail(&json!({
            "data": {"id": 4, "raceName": "Sprint", "achieved": 3, "failed": "2", "total_issues": 9}
        }));
        assert_eq!(race.race_id, Some(4));
        assert_eq!(race.total_issues, 9);
        assert_eq!(status.achieved, 3);
        assert_eq!(status.failed, 2);

        let (race, status) = normalize_race_detail(&json!(null));
        assert_eq!(race, RaceRecord::default());
        assert_eq!(status, IssueStatusCounts::default());
    }
}
