use std::collections::BTreeMap;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::null_default;

/// A recurring theme observed across several inventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub pattern_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub inventions: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub insights: String,
    #[serde(default, deserialize_with = "null_default")]
    pub examples: Vec<BTreeMap<String, String>>,
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        PatternKind::parse(&self.pattern_type)
    }

    pub fn label(&self) -> String {
        self.kind().label_for(&self.pattern_type)
    }
}

/// Closed vocabulary of pattern types, with `Unknown` for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    FailureToSuccess,
    WrongGoalRightResult,
    UnexpectedObservation,
    CrossPollination,
    PrerequisiteChain,
    AccidentToInnovation,
    Unknown,
}

impl PatternKind {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "failure_to_success" => PatternKind::FailureToSuccess,
            "wrong_goal_right_result" => PatternKind::WrongGoalRightResult,
            "unexpected_observation" => PatternKind::UnexpectedObservation,
            "cross_pollination" | "cross_domain" => PatternKind::CrossPollination,
            "prerequisite_chain" => PatternKind::PrerequisiteChain,
            "accident_to_innovation" | "accidental" => PatternKind::AccidentToInnovation,
            _ => PatternKind::Unknown,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PatternKind::AccidentToInnovation => Color::Magenta,
            PatternKind::CrossPollination => Color::Blue,
            PatternKind::FailureToSuccess => Color::Green,
            PatternKind::PrerequisiteChain => Color::Yellow,
            PatternKind::WrongGoalRightResult => Color::Red,
            PatternKind::UnexpectedObservation => Color::Cyan,
            PatternKind::Unknown => Color::Gray,
        }
    }

    /// Display label. `raw` is only consulted for `Unknown`.
    pub fn label_for(&self, raw: &str) -> String {
        match self {
            PatternKind::FailureToSuccess => "Failure To Success".to_string(),
            PatternKind::WrongGoalRightResult => "Wrong Goal Right Result".to_string(),
            PatternKind::UnexpectedObservation => "Unexpected Observation".to_string(),
            PatternKind::CrossPollination => "Cross Pollination".to_string(),
            PatternKind::PrerequisiteChain => "Prerequisite Chain".to_string(),
            PatternKind::AccidentToInnovation => "Accident To Innovation".to_string(),
            PatternKind::Unknown => title_case(raw),
        }
    }
}

/// `SOME_raw_type` -> `Some Raw Type`
fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
