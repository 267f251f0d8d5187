use crate::error::{FetchError, FetchResult};

use super::{LoadState, Ticket};

/// What a list-backed view should render.
///
/// A failed fetch is presented exactly like an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Loading,
    Empty,
    List,
}

/// The last-fetched collection for one view instance.
#[derive(Debug)]
pub struct CollectionView<T> {
    label: &'static str,
    ticket: Ticket,
    state: LoadState<Vec<T>>,
}

impl<T> CollectionView<T> {
    pub fn new(label: &'static str, ticket: Ticket) -> Self {
        Self {
            label,
            ticket,
            state: LoadState::Loading,
        }
    }

    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Apply a fetch outcome. Returns `false` when the result was discarded,
    /// either because it belongs to another view or this one already settled.
    pub fn resolve(&mut self, ticket: Ticket, outcome: FetchResult<Vec<T>>) -> bool {
        if ticket != self.ticket {
            tracing::debug!("Discarding stale {} result", self.label);
            return false;
        }
        if self.state.is_settled() {
            tracing::debug!("Ignoring repeat {} result", self.label);
            return false;
        }

        self.state = match outcome {
            Ok(items) => {
                tracing::debug!("Loaded {} {}", items.len(), self.label);
                LoadState::Ready(items)
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", self.label, e);
                LoadState::Failed(e)
            }
        };
        true
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            LoadState::Ready(items) => items,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&FetchError> {
        match &self.state {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn presentation(&self) -> Presentation {
        match &self.state {
            LoadState::Loading => Presentation::Loading,
            LoadState::Ready(items) if !items.is_empty() => Presentation::List,
            LoadState::Ready(_) | LoadState::Failed(_) => Presentation::Empty,
        }
    }
}
