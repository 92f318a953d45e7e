// Ranking & trend sequencer - Deterministic ordering for leaderboards and charts
use crate::domain::member::{MemberStatus, MemberStatusBar};
use crate::domain::ranking::{RankedUser, RankingRecord, TrendPoint};

/// Users by descending performance score. The sort is stable, so equal scores
/// keep their arrival order.
pub fn rank_users(records: &[RankingRecord]) -> Vec<RankedUser> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| b.performance.total_cmp(&a.performance));
    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, record)| RankedUser { rank: idx + 1, record })
        .collect()
}

/// Position of the best performing trend point, first one on ties.
/// Points without a numeric performance never win.
pub fn find_trend_peak(points: &[TrendPoint]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, point) in points.iter().enumerate() {
        let Some(value) = point.performance else {
            continue;
        };
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Members by descending issue count, capped at `limit` bars
pub fn rank_members(members: Vec<MemberStatus>, limit: usize) -> Vec<MemberStatusBar> {
    let mut bars: Vec<MemberStatusBar> = members.into_iter().map(MemberStatusBar::new).collect();
    bars.sort_by(|a, b| b.total.cmp(&a.total));
    bars.truncate(limit);
    bars
}
