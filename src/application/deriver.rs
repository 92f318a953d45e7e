// Metric deriver - Donut breakdowns and utilization from normalized records
use crate::domain::daily::{ActivityRecord, DayRecord};
use crate::domain::metrics::{
    format_hours_decimal, ActivityShare, DailyDonut, DonutSlice, LegendEntry, LoggedHoursSource,
    RaceActivityBreakdown, Utilization,
};
use crate::domain::race::RaceRecord;

pub const DAY_PALETTE: [&str; 6] = [
    "#5eead4", "#4f6f9f", "#1e3a8a", "#7c6aa6", "#60a5fa", "#94a3b8",
];
pub const RACE_PALETTE: [&str; 6] = [
    "#cfe9ff", "#1f3b7a", "#2f4b8f", "#f87171", "#60a5fa", "#94a3b8",
];
pub const UNUTILIZED_COLOR: &str = "#ef4444";
pub const UNUTILIZED_LABEL: &str = "Unutilization";

/// Group label for unlabeled work within a single day
pub const DAY_FALLBACK_LABEL: &str = "Other";
/// Group label for unlabeled work across a whole race
pub const RACE_FALLBACK_LABEL: &str = "Unknown";

const UNUTILIZED_EPSILON: f64 = 0.01;

/// Sum hours per label in first-seen order
fn group_hours<'a, I>(activities: I, fallback: &'a str) -> Vec<(&'a str, f64)>
where
    I: IntoIterator<Item = &'a ActivityRecord>,
{
    let mut groups: Vec<(&'a str, f64)> = Vec::new();
    for activity in activities {
        let label = activity.group_label(fallback);
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, hours)) => *hours += activity.hours,
            None => groups.push((label, activity.hours)),
        }
    }
    groups
}

/// `round(logged / ideal * 100)`, or 0 when there is no ideal to measure against
pub fn derive_utilization(total_logged_hours: f64, ideal_hours: f64) -> f64 {
    if ideal_hours > 0.0 {
        (total_logged_hours / ideal_hours * 100.0).round()
    } else {
        0.0
    }
}

/// Activity share of one day against its ideal hours.
///
/// With a positive ideal the slices always add up to 100%: whatever the
/// activities leave uncovered becomes an "Unutilization" slice. Without one
/// every slice is 0% and no remainder is added, so the slices sum to 0 rather
/// than showing a 0-hour "Unutilization" slice at 100%.
pub fn derive_daily_donut(day: &DayRecord) -> DailyDonut {
    if day.activities.is_empty() {
        return DailyDonut::default();
    }

    let ideal = day.ideal_daily_hours;
    let mut slices: Vec<DonutSlice> = group_hours(&day.activities, DAY_FALLBACK_LABEL)
        .into_iter()
        .enumerate()
        .map(|(idx, (name, hours))| DonutSlice {
            name: name.to_string(),
            hours,
            percentage: if ideal > 0.0 { hours / ideal * 100.0 } else { 0.0 },
            color: DAY_PALETTE[idx % DAY_PALETTE.len()],
        })
        .collect();

    if ideal > 0.0 {
        let covered: f64 = slices.iter().map(|s| s.percentage).sum();
        let unutilized = (100.0 - covered).max(0.0);
        if unutilized > UNUTILIZED_EPSILON {
            slices.push(DonutSlice {
                name: UNUTILIZED_LABEL.to_string(),
                hours: unutilized / 100.0 * ideal,
                percentage: unutilized,
                color: UNUTILIZED_COLOR,
            });
        }
    }

    let legend = slices.iter().map(LegendEntry::for_slice).collect();
    DailyDonut { slices, legend }
}

/// Activity totals over every day of a race, measured against the race's ideal hours.
///
/// Logged hours here are summed from the activity records, not taken from the
/// backend's race row.
pub fn derive_race_breakdown(days: &[DayRecord], ideal_hours: f64) -> RaceActivityBreakdown {
    let groups = group_hours(
        days.iter().flat_map(|d| d.activities.iter()),
        RACE_FALLBACK_LABEL,
    );
    let total: f64 = groups.iter().map(|(_, hours)| hours).sum();

    let activities = groups
        .into_iter()
        .enumerate()
        .map(|(idx, (name, hours))| ActivityShare {
            name: name.to_string(),
            hours,
            percentage: if total != 0.0 {
                (hours / total * 100.0).round()
            } else {
                0.0
            },
            color: RACE_PALETTE[idx % RACE_PALETTE.len()],
        })
        .collect();

    RaceActivityBreakdown {
        activities,
        utilization: Utilization {
            logged_hours: total,
            ideal_hours,
            percentage: derive_utilization(total, ideal_hours),
            source: LoggedHoursSource::Activities,
        },
        logged_label: format_hours_decimal(Some(total)),
        ideal_label: format_hours_decimal(Some(ideal_hours)),
    }
}

/// Utilization of a race row using the backend's own logged-hours figure.
/// A backend-reported percentage wins over the derived one.
pub fn race_row_utilization(race: &RaceRecord) -> Utilization {
    let percentage = race
        .time_utilization
        .unwrap_or_else(|| derive_utilization(race.logged_hours, race.ideal_hours));

    Utilization {
        logged_hours: race.logged_hours,
        ideal_hours: race.ideal_hours,
        percentage,
        source: LoggedHoursSource::Backend,
    }
}
