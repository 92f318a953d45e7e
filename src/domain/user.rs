// User domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Filters accepted by the users list
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    pub name: Option<String>,
    pub status: Option<String>,
    /// `YYYY-MM`
    pub created_at: Option<String>,
}

impl UserFilter {
    /// Non-empty filters as query pairs, in a fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("name", self.name.as_deref()),
            ("status", self.status.as_deref()),
            ("createdAt", self.created_at.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some((key, v)),
            _ => None,
        })
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTotal {
    pub total_users: i64,
}
