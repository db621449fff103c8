//! City typeahead state.
//!
//! Every keystroke may issue a lookup before the previous one returns, and
//! lookups can come back in any order. Each issued search gets a ticket with a
//! fresh sequence number; only the completion holding the most recently issued
//! ticket is applied, everything older is dropped.

use astro_core::city::CityCandidate;
use astro_core::error::LookupError;
use log::{debug, warn};

/// Queries shorter than this (in characters) never reach the lookup service.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverStatus {
    /// Nothing outstanding and no candidates to show
    #[default]
    Idle,
    /// The latest issued search has not completed yet
    Searching,
    /// Candidates from the latest completed search are available
    HasResults,
}

/// Handle for one issued search. Hand it back to [`CityResolver::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct CityResolver {
    /// Sequence number of the last issued (or invalidated) search
    issued: u64,
    /// Sequence number still awaiting completion, if any
    pending: Option<u64>,
    candidates: Vec<CityCandidate>,
}

impl CityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search for `query`.
    ///
    /// Returns `None` when the query is too short: the list is cleared and no
    /// lookup should be made. Either way, searches issued earlier become stale.
    pub fn begin(&mut self, query: &str) -> Option<SearchTicket> {
        self.issued += 1;
        if query.chars().count() < MIN_QUERY_CHARS {
            self.pending = None;
            self.candidates.clear();
            return None;
        }
        self.pending = Some(self.issued);
        Some(SearchTicket {
            seq: self.issued,
            query: query.to_string(),
        })
    }

    /// Apply the outcome of a search. Returns `false` if the ticket was stale
    /// and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<CityCandidate>, LookupError>,
    ) -> bool {
        if self.pending != Some(ticket.seq) {
            debug!(
                "Dropping stale city search #{} for {:?} (latest #{})",
                ticket.seq, ticket.query, self.issued
            );
            return false;
        }
        self.pending = None;
        match outcome {
            Ok(candidates) => {
                debug!(
                    "City search #{} for {:?}: {} candidates",
                    ticket.seq,
                    ticket.query,
                    candidates.len()
                );
                self.candidates = candidates;
            }
            Err(e) => {
                warn!("City search for {:?} failed: {}", ticket.query, e);
                self.candidates.clear();
            }
        }
        true
    }

    /// Close the suggestion list and orphan any outstanding search.
    pub fn dismiss(&mut self) {
        self.issued += 1;
        self.pending = None;
        self.candidates.clear();
    }

    pub fn status(&self) -> ResolverStatus {
        if self.pending.is_some() {
            ResolverStatus::Searching
        } else if !self.candidates.is_empty() {
            ResolverStatus::HasResults
        } else {
            ResolverStatus::Idle
        }
    }

    pub fn is_searching(&self) -> bool {
        self.pending.is_some()
    }

    pub fn candidates(&self) -> &[CityCandidate] {
        &self.candidates
    }

    pub fn candidate(&self, index: usize) -> Option<&CityCandidate> {
        self.candidates.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> CityCandidate {
        CityCandidate {
            name: name.to_string(),
            country: "Russia".to_string(),
            latitude: 55.0,
            longitude: 37.0,
            timezone: 3.0,
        }
    }

    #[test]
    fn short_queries_issue_nothing_and_clear() {
        let mut resolver = CityResolver::new();
        let ticket = resolver.begin("Mos").unwrap();
        assert!(resolver.complete(ticket, Ok(vec![city("Moscow")])));
        assert_eq!(resolver.status(), ResolverStatus::HasResults);

        for short in ["", "M", "М"] {
            assert!(resolver.begin(short).is_none(), "issued search for {short:?}");
            assert!(resolver.candidates().is_empty());
            assert_eq!(resolver.status(), ResolverStatus::Idle);
        }
    }

    #[test]
    fn length_is_counted_in_characters() {
        let mut resolver = CityResolver::new();
        // Two Cyrillic letters are four bytes but two characters
        assert!(resolver.begin("Мо").is_some());
    }

    #[test]
    fn searching_until_latest_completes() {
        let mut resolver = CityResolver::new();
        let ticket = resolver.begin("Par").unwrap();
        assert_eq!(resolver.status(), ResolverStatus::Searching);
        assert!(resolver.is_searching());
        resolver.complete(ticket, Ok(vec![city("Paris")]));
        assert_eq!(resolver.status(), ResolverStatus::HasResults);
        assert!(!resolver.is_searching());
    }

    #[test]
    fn later_query_wins_over_later_arrival() {
        let mut resolver = CityResolver::new();
        let first = resolver.begin("Mo").unwrap();
        let second = resolver.begin("Mos").unwrap();

        assert!(resolver.complete(second, Ok(vec![city("Moscow")])));
        assert!(!resolver.complete(first, Ok(vec![city("Mombasa"), city("Monaco")])));

        assert_eq!(resolver.candidates(), &[city("Moscow")]);
        assert_eq!(resolver.status(), ResolverStatus::HasResults);
    }

    #[test]
    fn stale_completion_does_not_end_searching() {
        let mut resolver = CityResolver::new();
        let first = resolver.begin("Lo").unwrap();
        let _second = resolver.begin("Lon").unwrap();
        assert!(!resolver.complete(first, Ok(vec![city("Lodz")])));
        assert_eq!(resolver.status(), ResolverStatus::Searching);
        assert!(resolver.candidates().is_empty());
    }

    #[test]
    fn short_query_orphans_outstanding_search() {
        let mut resolver = CityResolver::new();
        let ticket = resolver.begin("Be").unwrap();
        assert!(resolver.begin("B").is_none());
        assert!(!resolver.complete(ticket, Ok(vec![city("Berlin")])));
        assert!(resolver.candidates().is_empty());
    }

    #[test]
    fn failure_clears_list_and_returns_to_idle() {
        let mut resolver = CityResolver::new();
        let ticket = resolver.begin("Ro").unwrap();
        resolver.complete(ticket, Ok(vec![city("Rome")]));

        let ticket = resolver.begin("Rom").unwrap();
        assert!(resolver.complete(ticket, Err(LookupError::Status(500))));
        assert!(resolver.candidates().is_empty());
        assert_eq!(resolver.status(), ResolverStatus::Idle);
    }

    #[test]
    fn dismiss_closes_list_and_orphans_pending() {
        let mut resolver = CityResolver::new();
        let ticket = resolver.begin("Ki").unwrap();
        resolver.dismiss();
        assert!(!resolver.complete(ticket, Ok(vec![city("Kyiv")])));
        assert_eq!(resolver.status(), ResolverStatus::Idle);
    }
}
