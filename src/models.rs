use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the platform growth time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSample {
    pub timestamp: DateTime<Utc>,
    pub value: i64,
}

/// A time-ordered series of growth samples. Regenerated on every request,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub samples: Vec<GrowthSample>,
}

/// Per-day rollup of content activity counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAggregate {
    pub day: String,
    pub articles: i64,
    pub news: i64,
    pub ads: i64,
}

/// Payload for the static management pages. The form fields are placeholders
/// until the editors are wired up to a real backend.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub title: String,
    pub description: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Serialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
}

impl FormField {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
        }
    }
}
