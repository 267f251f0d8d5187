use crate::error::{FetchError, FetchResult};
use crate::models::AnalysisRecord;

use super::Ticket;

/// Where a detail view's record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Handed over by the action that produced it; never fetched.
    Supplied,
    MustFetch,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Ready(Box<AnalysisRecord>),
    NotFound,
    Failed(FetchError),
}

/// State for the single-analysis screen.
#[derive(Debug)]
pub struct DetailView {
    id: i64,
    ticket: Ticket,
    provenance: Provenance,
    state: DetailState,
}

impl DetailView {
    pub fn open(id: i64, supplied: Option<AnalysisRecord>, ticket: Ticket) -> Self {
        let (provenance, state) = match supplied {
            Some(record) => {
                log_dangling(&record);
                (Provenance::Supplied, DetailState::Ready(Box::new(record)))
            }
            None => (Provenance::MustFetch, DetailState::Loading),
        };
        Self {
            id,
            ticket,
            provenance,
            state,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn needs_fetch(&self) -> bool {
        self.provenance == Provenance::MustFetch && self.state == DetailState::Loading
    }

    pub fn record(&self) -> Option<&AnalysisRecord> {
        match &self.state {
            DetailState::Ready(record) => Some(&**record),
            _ => None,
        }
    }

    pub fn resolve(&mut self, ticket: Ticket, outcome: FetchResult<AnalysisRecord>) -> bool {
        if ticket != self.ticket || self.state != DetailState::Loading {
            tracing::debug!("Discarding stale analysis result for {}", self.id);
            return false;
        }

        self.state = match outcome {
            Ok(record) => {
                log_dangling(&record);
                DetailState::Ready(Box::new(record))
            }
            Err(FetchError::NotFound) => {
                tracing::warn!("Analysis {} not found", self.id);
                DetailState::NotFound
            }
            Err(e) => {
                tracing::error!("Error fetching analysis {}: {}", self.id, e);
                DetailState::Failed(e)
            }
        };
        true
    }
}

fn log_dangling(record: &AnalysisRecord) {
    for connection in record.analysis.dangling_connections() {
        tracing::warn!(
            "Analysis {} has a connection {} -> {} with no matching discovery",
            record.id,
            connection.from_discovery_id,
            connection.to_discovery_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Analysis;
    use crate::state::TicketIssuer;

    fn record(id: i64) -> AnalysisRecord {
        AnalysisRecord {
            id,
            analysis: Analysis {
                invention_name: "Velcro".to_string(),
                invention_year: Some(1941),
                ..Default::default()
            },
            created_at: None,
        }
    }

    #[test]
    fn test_supplied_is_ready_without_fetch() {
        let mut issuer = TicketIssuer::default();
        let view = DetailView::open(4, Some(record(4)), issuer.issue());
        assert_eq!(view.provenance(), Provenance::Supplied);
        assert!(!view.needs_fetch());
        assert_eq!(view.record().map(|r| r.id), Some(4));
    }

    #[test]
    fn test_must_fetch_starts_loading() {
        let mut issuer = TicketIssuer::default();
        let mut view = DetailView::open(4, None, issuer.issue());
        assert!(view.needs_fetch());
        assert_eq!(view.state(), &DetailState::Loading);

        assert!(view.resolve(view.ticket(), Ok(record(4))));
        assert!(!view.needs_fetch());
        assert!(view.record().is_some());
    }

    #[test]
    fn test_not_found_is_distinct_from_failure() {
        let mut issuer = TicketIssuer::default();

        let mut missing = DetailView::open(999, None, issuer.issue());
        missing.resolve(missing.ticket(), Err(FetchError::NotFound));
        assert_eq!(missing.state(), &DetailState::NotFound);

        let mut broken = DetailView::open(5, None, issuer.issue());
        broken.resolve(broken.ticket(), Err(FetchError::Service { status: 500 }));
        assert_eq!(
            broken.state(),
            &DetailState::Failed(FetchError::Service { status: 500 })
        );
    }

    #[test]
    fn test_supplied_view_ignores_late_fetch() {
        let mut issuer = TicketIssuer::default();
        let mut view = DetailView::open(4, Some(record(4)), issuer.issue());
        assert!(!view.resolve(view.ticket(), Err(FetchError::NotFound)));
        assert!(view.record().is_some());
    }
}
