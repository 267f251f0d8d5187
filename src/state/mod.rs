//! Per-view fetch state.
//!
//! Every view instance owns a [`Ticket`]. A fetch result is applied only to
//! the view holding the matching ticket, so results that arrive after the
//! view was replaced are dropped instead of mutating dead state.

mod collection;
mod detail;

pub use collection::{CollectionView, Presentation};
pub use detail::{DetailState, DetailView, Provenance};

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct TicketIssuer {
    next: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> Ticket {
        self.next += 1;
        Ticket(self.next)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(FetchError),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}
