//! Query, result and candidate types
//!
//! A `Query` is created whenever the controller decides to hit the
//! suggestion service; the matching `SuggestionResult` is turned into a
//! `CandidateList` only after it has passed the staleness check.

use std::fmt;

/// An issued suggestion query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    /// Monotonically increasing per issued query
    pub sequence_id: u64,
}

/// Suggestions returned by the service for `for_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionResult {
    pub for_text: String,
    pub candidates: Vec<String>,
}

impl SuggestionResult {
    pub fn new(for_text: &str, candidates: &[&str]) -> Self {
        Self {
            for_text: for_text.to_string(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Kind of a displayed candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// "Use exactly what I typed"
    RawQuery,
    /// A ranked suggestion from the service
    Suggestion,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::RawQuery => write!(f, "typed"),
            CandidateKind::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// A single selectable entry in the suggestion popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub text: String,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn raw(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: CandidateKind::RawQuery,
        }
    }

    pub fn suggestion(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: CandidateKind::Suggestion,
        }
    }
}

/// Immutable candidate list built from a fresh result
///
/// Index 0 is the raw-query pseudo-candidate. The list holds at most
/// `results_limit + 1` entries and is empty when the service had nothing
/// to suggest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateList {
    /// Input text this list answers
    for_text: String,
    items: Vec<Candidate>,
}

impl CandidateList {
    pub fn from_result(result: &SuggestionResult, results_limit: usize) -> Self {
        let suggestions: Vec<Candidate> = result
            .candidates
            .iter()
            .filter(|c| !c.is_empty() && **c != result.for_text)
            .take(results_limit)
            .map(|c| Candidate::suggestion(c))
            .collect();

        let for_text = result.for_text.clone();
        if suggestions.is_empty() {
            return Self {
                for_text,
                items: Vec::new(),
            };
        }

        let mut items = Vec::with_capacity(suggestions.len() + 1);
        items.push(Candidate::raw(&result.for_text));
        items.extend(suggestions);
        Self { for_text, items }
    }

    pub fn for_text(&self) -> &str {
        &self.for_text
    }

    pub fn items(&self) -> &[Candidate] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.items.get(index)
    }
}
