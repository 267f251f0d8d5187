use serde::{Deserialize, Serialize};

/// Year-indexed summary row for chronological browsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: i32,
    pub invention: String,
    #[serde(default)]
    pub key_discovery: String,
    #[serde(default)]
    pub pattern_count: u32,
    #[serde(default)]
    pub prerequisite_count: u32,
}
