// Ranking and trend domain models
use serde::{Deserialize, Serialize};

/// Per-user scores within one race
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub user_name: String,
    pub total_issues: i64,
    pub logged_hours: f64,
    pub rqs: f64,
    pub wps: f64,
    pub fps: f64,
    pub tus: f64,
    pub performance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    pub rank: usize,
    #[serde(flatten)]
    pub record: RankingRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub race_name: String,
    pub rqs: f64,
    pub tus: f64,
    /// `None` when the backend sent no usable number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
}

impl TrendPoint {
    /// Value plotted on the chart
    pub fn chart_performance(&self) -> f64 {
        self.performance.unwrap_or(0.0)
    }
}

/// Trend series for a month plus the point to highlight
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceTrend {
    pub points: Vec<TrendPoint>,
    /// Plotted values, missing performance drawn as 0
    pub performance_series: Vec<f64>,
    #[serde(serialize_with = "serialize_peak")]
    pub peak_index: Option<usize>,
}

fn serialize_peak<S>(peak: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match peak {
        Some(idx) => serializer.serialize_i64(*idx as i64),
        None => serializer.serialize_i64(-1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_index_serializes_missing_as_minus_one() {
        let trend = RaceTrend {
            points: Vec::new(),
            performance_series: Vec::new(),
            peak_index: None,
        };
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["peakIndex"], -1);

        let trend = RaceTrend {
            points: Vec::new(),
            performance_series: Vec::new(),
            peak_index: Some(3),
        };
        let json = serde_json::to_value(&trend).unwrap();
        assert_eq!(json["peakIndex"], 3);
    }

    #[test]
    fn test_chart_performance_defaults_to_zero() {
        let point = TrendPoint::default();
        assert_eq!(point.chart_performance(), 0.0);
    }
}
