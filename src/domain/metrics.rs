// Display-ready metric models
use serde::Serialize;

/// One wedge of the daily donut
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonutSlice {
    pub name: String,
    pub hours: f64,
    pub percentage: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub id: String,
    pub label: String,
    pub color: &'static str,
}

impl LegendEntry {
    pub fn for_slice(slice: &DonutSlice) -> Self {
        Self {
            id: slice.name.clone(),
            label: format!(
                "{} : {} | {:.2}%",
                slice.name,
                format_hours_label(Some(slice.hours)),
                slice.percentage
            ),
            color: slice.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDonut {
    pub slices: Vec<DonutSlice>,
    pub legend: Vec<LegendEntry>,
}

/// Where the logged-hours figure behind a utilization came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoggedHoursSource {
    /// Trusted from the backend's race row
    Backend,
    /// Summed from the daily activity records
    Activities,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Utilization {
    pub logged_hours: f64,
    pub ideal_hours: f64,
    pub percentage: f64,
    pub source: LoggedHoursSource,
}

/// An activity group's share of a whole race
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityShare {
    pub name: String,
    pub hours: f64,
    pub percentage: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceActivityBreakdown {
    pub activities: Vec<ActivityShare>,
    pub utilization: Utilization,
    pub logged_label: String,
    pub ideal_label: String,
}

fn split_hours(value: Option<f64>) -> (i64, i64) {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => {
            let hours = v.floor();
            let minutes = ((v - hours) * 60.0).round();
            (hours as i64, minutes as i64)
        }
        _ => (0, 0),
    }
}

/// `1.5` -> `"1 jam 30 menit"`; missing, negative or non-finite input reads as zero
pub fn format_hours_decimal(value: Option<f64>) -> String {
    let (hours, minutes) = split_hours(value);
    format!("{} jam {} menit", hours, minutes)
}

/// `1.5` -> `"1h 30m"`
pub fn format_hours_label(value: Option<f64>) -> String {
    let (hours, minutes) = split_hours(value);
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours_decimal() {
        assert_eq!(format_hours_decimal(Some(1.5)), "1 jam 30 menit");
        assert_eq!(format_hours_decimal(Some(0.0)), "0 jam 0 menit");
        assert_eq!(format_hours_decimal(Some(8.25)), "8 jam 15 menit");
    }

    #[test]
    fn test_format_hours_decimal_degenerate_input() {
        assert_eq!(format_hours_decimal(None), "0 jam 0 menit");
        assert_eq!(format_hours_decimal(Some(-2.5)), "0 jam 0 menit");
        assert_eq!(format_hours_decimal(Some(f64::NAN)), "0 jam 0 menit");
    }

    #[test]
    fn test_format_hours_label() {
        assert_eq!(format_hours_label(Some(1.5)), "1h 30m");
        assert_eq!(format_hours_label(Some(4.0)), "4h 0m");
        assert_eq!(format_hours_label(None), "0h 0m");
    }

    #[test]
    fn test_legend_entry_label() {
        let slice = DonutSlice {
            name: "Design".to_string(),
            hours: 2.5,
            percentage: 31.25,
            color: "#5eead4",
        };
        let entry = LegendEntry::for_slice(&slice);
        assert_eq!(entry.id, "Design");
        assert_eq!(entry.label, "Design : 2h 30m | 31.25%");
        assert_eq!(entry.color, "#5eead4");
    }
}
