//! In-memory gateway for tests, with per-call counters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::models::{
    Analysis, AnalysisRecord, InventionName, InventionSummary, Pattern, TimelineEntry,
};

use super::AnalysisGateway;

#[derive(Default)]
pub struct Calls {
    pub list_inventions: AtomicUsize,
    pub list_patterns: AtomicUsize,
    pub list_timeline: AtomicUsize,
    pub get_analysis: AtomicUsize,
    pub create_analysis: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        [
            &self.list_inventions,
            &self.list_patterns,
            &self.list_timeline,
            &self.get_analysis,
            &self.create_analysis,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }
}

pub struct StubGateway {
    pub inventions: FetchResult<Vec<InventionSummary>>,
    pub patterns: FetchResult<Vec<Pattern>>,
    pub timeline: FetchResult<Vec<TimelineEntry>>,
    pub analyses: Mutex<Vec<AnalysisRecord>>,
    pub create_error: Option<FetchError>,
    pub calls: Calls,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            inventions: Ok(Vec::new()),
            patterns: Ok(Vec::new()),
            timeline: Ok(Vec::new()),
            analyses: Mutex::new(Vec::new()),
            create_error: None,
            calls: Calls::default(),
        }
    }
}

impl StubGateway {
    pub fn unreachable() -> Self {
        let down = FetchError::Transport("connection refused".to_string());
        Self {
            inventions: Err(down.clone()),
            patterns: Err(down.clone()),
            timeline: Err(down.clone()),
            create_error: Some(down),
            ..Self::default()
        }
    }

    pub fn with_analysis(self, record: AnalysisRecord) -> Self {
        self.analyses.lock().unwrap().push(record);
        self
    }
}

pub fn analysis_record(id: i64, name: &str) -> AnalysisRecord {
    AnalysisRecord {
        id,
        analysis: Analysis {
            invention_name: name.to_string(),
            summary: format!("How {name} came to be"),
            ..Default::default()
        },
        created_at: None,
    }
}

#[async_trait]
impl AnalysisGateway for StubGateway {
    async fn list_inventions(&self) -> FetchResult<Vec<InventionSummary>> {
        self.calls.list_inventions.fetch_add(1, Ordering::SeqCst);
        self.inventions.clone()
    }

    async fn list_patterns(&self) -> FetchResult<Vec<Pattern>> {
        self.calls.list_patterns.fetch_add(1, Ordering::SeqCst);
        self.patterns.clone()
    }

    async fn list_timeline(&self) -> FetchResult<Vec<TimelineEntry>> {
        self.calls.list_timeline.fetch_add(1, Ordering::SeqCst);
        self.timeline.clone()
    }

    async fn get_analysis(&self, id: i64) -> FetchResult<AnalysisRecord> {
        self.calls.get_analysis.fetch_add(1, Ordering::SeqCst);
        self.analyses
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(FetchError::NotFound)
    }

    async fn create_analysis(&self, name: &InventionName) -> FetchResult<AnalysisRecord> {
        self.calls.create_analysis.fetch_add(1, Ordering::SeqCst);
        if let Some(e) = &self.create_error {
            return Err(e.clone());
        }
        let mut analyses = self.analyses.lock().unwrap();
        let record = analysis_record(analyses.len() as i64 + 100, name.as_str());
        analyses.push(record.clone());
        Ok(record)
    }
}
