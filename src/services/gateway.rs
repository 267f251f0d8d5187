use async_trait::async_trait;

use crate::error::FetchResult;
use crate::models::{AnalysisRecord, InventionName, InventionSummary, Pattern, TimelineEntry};

/// Calls against the external analysis service.
///
/// Each method issues exactly one request. Nothing here retries, caches or
/// batches; callers decide what a failure degrades to.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    async fn list_inventions(&self) -> FetchResult<Vec<InventionSummary>>;

    async fn list_patterns(&self) -> FetchResult<Vec<Pattern>>;

    async fn list_timeline(&self) -> FetchResult<Vec<TimelineEntry>>;

    async fn get_analysis(&self, id: i64) -> FetchResult<AnalysisRecord>;

    /// Ask the service to analyse a new invention
    async fn create_analysis(&self, name: &InventionName) -> FetchResult<AnalysisRecord>;
}
