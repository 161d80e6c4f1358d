//! Highlighted-candidate bookkeeping
//!
//! Pure index arithmetic over `{selected_index, candidate_count}`. The index
//! is clamped to `candidate_count - 1` on the way down, so it never points
//! past the last rendered candidate.

use super::query::Candidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected_index: usize,
    candidate_count: usize,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over at the first candidate of a list with `candidate_count` entries
    pub fn reset(&mut self, candidate_count: usize) {
        self.selected_index = 0;
        self.candidate_count = candidate_count;
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.candidate_count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1).min(self.candidate_count - 1);
    }

    /// Text of the highlighted candidate, `None` when out of bounds
    pub fn current_value<'a>(&self, candidates: &'a [Candidate]) -> Option<&'a str> {
        if self.selected_index >= self.candidate_count {
            return None;
        }
        candidates
            .get(self.selected_index)
            .map(|c| c.text.as_str())
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
