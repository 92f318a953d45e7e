// Member issue status domain model
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatus {
    pub user_name: String,
    pub initiated: i64,
    pub todo: i64,
    pub active: i64,
    pub hold: i64,
    pub achieved: i64,
    pub failed: i64,
    pub canceled: i64,
    pub finished: i64,
}

impl MemberStatus {
    pub fn total(&self) -> i64 {
        self.initiated
            + self.todo
            + self.active
            + self.hold
            + self.achieved
            + self.failed
            + self.canceled
            + self.finished
    }

    /// First two words of the name, for chart axis labels
    pub fn short_name(&self) -> String {
        self.user_name
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Chart row for the members status bar chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStatusBar {
    pub name: String,
    pub total: i64,
    #[serde(flatten)]
    pub status: MemberStatus,
}

impl MemberStatusBar {
    pub fn new(status: MemberStatus) -> Self {
        Self {
            name: status.short_name(),
            total: status.total(),
            status,
        }
    }
}
