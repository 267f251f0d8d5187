use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::{null_default, timestamp};

/// One row of the analysed-inventions listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventionSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl InventionSummary {
    /// Date the analysis was added, e.g. `Jan 5, 2024`
    pub fn added_on(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// A trimmed, non-empty invention name accepted by the create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventionName(String);

impl InventionName {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "invention name must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InventionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_invention_name_trims() {
        let name = assert_ok!(InventionName::parse("  Velcro \n"));
        assert_eq!(name.as_str(), "Velcro");
    }

    #[test]
    fn test_invention_name_rejects_blank() {
        assert_err!(InventionName::parse(""));
        assert_err!(InventionName::parse("   "));
        assert!(matches!(
            InventionName::parse("\t"),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_summary_from_service_json() {
        let json = r#"{
            "id": 2,
            "name": "Penicillin",
            "year": 1928,
            "summary": "Mould on a petri dish",
            "created_at": "2024-01-05T10:20:30.123456"
        }"#;
        let summary: InventionSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 2);
        assert_eq!(summary.year, Some(1928));
        assert_eq!(summary.added_on(), "Jan 5, 2024");
    }

    #[test]
    fn test_summary_without_year() {
        let json = r#"{"id": 1, "name": "Velcro", "year": null, "summary": "", "created_at": "2024-03-01T00:00:00Z"}"#;
        let summary: InventionSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.year, None);
    }
}
