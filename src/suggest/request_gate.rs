//! Suggestion request sequencing
//!
//! Every issued query gets the next sequence id. A resolution is applied only
//! when it answers the latest live query and still matches the input text;
//! superseded requests are never cancelled, their results are just dropped.

use tokio::sync::mpsc::UnboundedSender;

use super::query::{Query, SuggestionResult};
use crate::lookup::{LookupError, LookupRequest};

/// Outcome of resolving a suggestion response against the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Fresh result for the live query
    Fresh(SuggestionResult),
    /// Superseded query, or text no longer matches
    Stale,
    /// Transport failed for the live query
    Failed(LookupError),
}

pub struct RequestGate {
    /// Sequence id of the most recently issued query
    latest_sequence_id: u64,
    /// Query whose response may still be applied
    live: Option<Query>,
    /// Text of the last issued query, for de-duplicating unchanged input
    last_issued_text: Option<String>,
    results_limit: usize,
    request_tx: UnboundedSender<LookupRequest>,
}

impl RequestGate {
    pub fn new(request_tx: UnboundedSender<LookupRequest>, results_limit: usize) -> Self {
        Self {
            latest_sequence_id: 0,
            live: None,
            last_issued_text: None,
            results_limit,
            request_tx,
        }
    }

    /// Issue a suggestion query for `text`
    ///
    /// Returns immediately. If the worker is gone the query simply never
    /// resolves.
    pub fn issue(&mut self, text: &str) -> Query {
        self.latest_sequence_id = self.latest_sequence_id.wrapping_add(1);
        let query = Query {
            text: text.to_string(),
            sequence_id: self.latest_sequence_id,
        };

        let request = LookupRequest::Suggest {
            query: query.clone(),
            limit: self.results_limit,
        };
        if self.request_tx.send(request).is_err() {
            log::warn!(
                "Lookup worker unavailable, query {} for '{}' will not resolve",
                query.sequence_id,
                query.text
            );
        }

        self.live = Some(query.clone());
        self.last_issued_text = Some(query.text.clone());
        query
    }

    /// Issue a query only when `text` differs from the last issued text
    pub fn issue_if_changed(&mut self, text: &str) -> Option<Query> {
        if self.last_issued_text.as_deref() == Some(text) {
            return None;
        }
        Some(self.issue(text))
    }

    /// Check a completed fetch against the latest query and the live input
    pub fn resolve(
        &mut self,
        sequence_id: u64,
        outcome: Result<SuggestionResult, LookupError>,
        current_text: &str,
    ) -> Resolution {
        let is_live = self
            .live
            .as_ref()
            .is_some_and(|q| q.sequence_id == sequence_id);
        if !is_live {
            log::debug!(
                "Dropping stale suggestions for query {} (latest {})",
                sequence_id,
                self.latest_sequence_id
            );
            return Resolution::Stale;
        }

        match outcome {
            Err(e) => {
                log::warn!("Suggestion fetch {} failed: {}", sequence_id, e);
                self.live = None;
                Resolution::Failed(e)
            }
            Ok(result) if result.for_text != current_text => {
                log::debug!(
                    "Dropping suggestions for '{}', input is now '{}'",
                    result.for_text,
                    current_text
                );
                Resolution::Stale
            }
            Ok(result) => {
                self.live = None;
                Resolution::Fresh(result)
            }
        }
    }

    /// Let the next `issue_if_changed` go out even for the last issued text
    ///
    /// Used when the input was rewritten without a query, e.g. by a preview.
    pub fn forget_issued_text(&mut self) {
        self.last_issued_text = None;
    }

    /// Forget the live query so no in-flight response can be applied
    pub fn invalidate(&mut self) {
        self.live = None;
        self.last_issued_text = None;
    }

    pub fn has_pending(&self) -> bool {
        self.live.is_some()
    }

    pub fn latest_sequence_id(&self) -> u64 {
        self.latest_sequence_id
    }

    pub fn results_limit(&self) -> usize {
        self.results_limit
    }
}

#[cfg(test)]
#[path = "request_gate_tests.rs"]
mod request_gate_tests;
