use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_default, timestamp, PatternKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryKind {
    Accidental,
    FailedExperiment,
    CrossDomain,
    Prerequisite,
    Serendipitous,
    Observation,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DiscoveryKind {
    pub fn label(&self) -> &'static str {
        match self {
            DiscoveryKind::Accidental => "Accidental",
            DiscoveryKind::FailedExperiment => "Failed Experiment",
            DiscoveryKind::CrossDomain => "Cross Domain",
            DiscoveryKind::Prerequisite => "Prerequisite",
            DiscoveryKind::Serendipitous => "Serendipitous",
            DiscoveryKind::Observation => "Observation",
            DiscoveryKind::Unknown => "Unknown",
        }
    }
}

/// One step in an invention's causal chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    #[serde(default, deserialize_with = "null_default")]
    pub id: String,
    #[serde(default)]
    pub year: Option<i32>,
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub discoverers: Vec<String>,
    #[serde(default)]
    pub discovery_type: DiscoveryKind,
    #[serde(default)]
    pub original_goal: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub actual_outcome: String,
    #[serde(default, deserialize_with = "null_default")]
    pub significance: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Directed edge between two discoveries of the same analysis.
///
/// The ids are not checked against the discovery list; see
/// [`Analysis::dangling_connections`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from_discovery_id: String,
    pub to_discovery_id: String,
    #[serde(default, deserialize_with = "null_default")]
    pub relationship_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
}

/// The full origin-story record for one invention.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Analysis {
    pub invention_name: String,
    #[serde(default)]
    pub invention_year: Option<i32>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub discoveries: Vec<Discovery>,
    #[serde(default, deserialize_with = "null_default")]
    pub connections: Vec<Connection>,
    #[serde(default, deserialize_with = "null_default")]
    pub patterns_identified: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub pattern_explanations: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_default")]
    pub serendipity_moments: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub critical_prerequisites: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub objective_blindness_examples: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub narrative: String,
    #[serde(default, deserialize_with = "null_default")]
    pub key_lesson: String,
}

impl Analysis {
    pub fn discovery(&self, id: &str) -> Option<&Discovery> {
        self.discoveries.iter().find(|d| d.id == id)
    }

    /// Discovery title for display, falling back to the raw id.
    pub fn endpoint_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.discovery(id).map(|d| d.title.as_str()).unwrap_or(id)
    }

    pub fn dangling_connections(&self) -> Vec<&Connection> {
        let known: HashSet<&str> = self.discoveries.iter().map(|d| d.id.as_str()).collect();
        self.connections
            .iter()
            .filter(|c| {
                !known.contains(c.from_discovery_id.as_str())
                    || !known.contains(c.to_discovery_id.as_str())
            })
            .collect()
    }

    pub fn pattern_kinds(&self) -> Vec<PatternKind> {
        self.patterns_identified
            .iter()
            .map(|p| PatternKind::parse(p))
            .collect()
    }

    /// Explanation for an identified pattern, if the service provided one
    pub fn explanation_for(&self, pattern: &str) -> Option<&str> {
        self.pattern_explanations
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(pattern))
            .map(|(_, text)| text.as_str())
    }
}

/// Service response for both get-by-id and create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: i64,
    pub analysis: Analysis,
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}
