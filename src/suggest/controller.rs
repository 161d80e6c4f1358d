//! Suggestion controller
//!
//! Turns key events into suggestion queries, applies worker responses only
//! while they are fresh, and drives the highlighted candidate. All state is
//! owned here and mutated on the UI thread; the lookup worker only ever sees
//! request messages and answers over a channel.

use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use ratatui::style::Style;
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::TextArea;

use super::key_class::{Direction, KeyCategory};
use super::query::{Candidate, CandidateList};
use super::request_gate::{RequestGate, Resolution};
use super::selection::SelectionModel;
use crate::config::{Config, MAX_RESULTS_LIMIT};
use crate::lookup::{Definition, LookupError, LookupRequest, LookupResponse};
use crate::notification::{NotificationKind, NotificationState};

const PLACEHOLDER: &str = "Type a word...";

pub type CandidatesListener = Box<dyn FnMut(&[Candidate], usize)>;
pub type DefinitionsListener = Box<dyn FnMut(&[Definition])>;
pub type NotFoundListener = Box<dyn FnMut(&str)>;

pub struct SuggestionController {
    textarea: TextArea<'static>,
    gate: RequestGate,
    selection: SelectionModel,
    /// `None` until a fresh result arrives; `Some(empty)` means no suggestions
    candidates: Option<CandidateList>,
    definitions: Vec<Definition>,
    definition_request_id: u64,
    /// Definition request whose response may still be applied
    live_definition: Option<u64>,
    last_transport_failure: Option<LookupError>,
    notification: NotificationState,
    not_found_timeout: Duration,
    request_tx: UnboundedSender<LookupRequest>,
    response_rx: Receiver<LookupResponse>,
    candidates_listeners: Vec<CandidatesListener>,
    definitions_listeners: Vec<DefinitionsListener>,
    not_found_listeners: Vec<NotFoundListener>,
}

impl SuggestionController {
    pub fn new(
        config: &Config,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(PLACEHOLDER);

        Self {
            textarea,
            gate: RequestGate::new(
                request_tx.clone(),
                config.suggest.results_limit.min(MAX_RESULTS_LIMIT),
            ),
            selection: SelectionModel::new(),
            candidates: None,
            definitions: Vec::new(),
            definition_request_id: 0,
            live_definition: None,
            last_transport_failure: None,
            notification: NotificationState::new(),
            not_found_timeout: Duration::from_millis(config.notification.not_found_ms),
            request_tx,
            response_rx,
            candidates_listeners: Vec::new(),
            definitions_listeners: Vec::new(),
            not_found_listeners: Vec::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Input handlers
    // ---------------------------------------------------------------------

    /// Handle a key press end to end: pre-edit handling, the text edit, then
    /// post-edit handling
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_down(key) {
            return;
        }
        self.textarea.input(key);
        self.handle_key_up(key);
    }

    /// Handle keys that act before (or instead of) a text edit
    ///
    /// Returns true when the key was consumed and must not reach the input.
    pub fn handle_key_down(&mut self, key: KeyEvent) -> bool {
        match KeyCategory::classify(&key) {
            KeyCategory::Navigation(direction) => {
                self.navigate(direction);
                true
            }
            KeyCategory::Commit => {
                self.handle_submit();
                true
            }
            KeyCategory::Cursor => {
                self.textarea.input(key);
                true
            }
            KeyCategory::Ignored => true,
            KeyCategory::Content => false,
        }
    }

    /// Handle a content key after its edit has been applied to the input
    pub fn handle_key_up(&mut self, key: KeyEvent) {
        if KeyCategory::classify(&key) == KeyCategory::Content {
            self.on_text_changed();
        }
    }

    pub fn handle_candidate_click(&mut self, value: &str) {
        self.set_text(value);
        self.commit(value);
    }

    pub fn handle_submit(&mut self) {
        let word = self.text().to_string();
        self.commit(&word);
    }

    /// Insert pasted text at the caret; line breaks become spaces
    pub fn handle_paste(&mut self, text: &str) {
        let flattened = text.replace(['\r', '\n'], " ");
        self.textarea.insert_str(&flattened);
        self.on_text_changed();
    }

    /// Replace the input text as if the user had typed it
    pub fn set_input(&mut self, text: &str) {
        self.set_text(text);
        self.on_text_changed();
    }

    fn navigate(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.selection.move_up(),
            Direction::Down => self.selection.move_down(),
        }

        // Preview the highlighted candidate without re-querying
        if let Some(value) = self
            .selection
            .current_value(self.candidates())
            .map(str::to_string)
        {
            self.set_text(&value);
            self.gate.forget_issued_text();
        }
        self.emit_candidates_changed();
    }

    fn on_text_changed(&mut self) {
        let text = self.text().to_string();
        if text.is_empty() {
            self.clear_suggestions();
            return;
        }

        self.gate.issue_if_changed(&text);

        // Only a list that answers the current text can be navigated; anything
        // else waits for the fresh result
        let previous = self.selection;
        let navigable = self
            .candidates
            .as_ref()
            .filter(|list| list.for_text() == text)
            .map_or(0, CandidateList::len);
        self.selection.reset(navigable);
        if self.selection != previous {
            self.emit_candidates_changed();
        }
    }

    // ---------------------------------------------------------------------
    // Commit and responses
    // ---------------------------------------------------------------------

    /// Confirm `word` and request its definitions
    ///
    /// Blank words are ignored.
    pub fn commit(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        self.clear_suggestions();
        self.notification.dismiss();

        self.definition_request_id = self.definition_request_id.wrapping_add(1);
        let request_id = self.definition_request_id;
        self.live_definition = Some(request_id);

        let request = LookupRequest::Define {
            word: word.to_string(),
            request_id,
        };
        if self.request_tx.send(request).is_err() {
            log::warn!("Lookup worker unavailable, cannot define '{}'", word);
        }
    }

    /// Apply every response the worker has delivered so far
    ///
    /// Returns the number of responses processed.
    pub fn poll_responses(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(response) = self.response_rx.try_recv() {
            self.apply_response(response);
            processed += 1;
        }
        processed
    }

    pub fn apply_response(&mut self, response: LookupResponse) {
        match response {
            LookupResponse::Suggestions {
                sequence_id,
                result,
            } => {
                let current = self.text().to_string();
                match self.gate.resolve(sequence_id, result, &current) {
                    Resolution::Fresh(result) => {
                        let list = CandidateList::from_result(&result, self.gate.results_limit());
                        self.replace_candidates(Some(list));
                    }
                    Resolution::Failed(e) => self.last_transport_failure = Some(e),
                    Resolution::Stale => {}
                }
            }
            LookupResponse::Definitions {
                request_id,
                word,
                result,
            } => self.apply_definitions(request_id, &word, result),
        }
    }

    fn apply_definitions(
        &mut self,
        request_id: u64,
        word: &str,
        result: Result<Vec<Definition>, LookupError>,
    ) {
        if self.live_definition != Some(request_id) {
            log::debug!(
                "Dropping definitions for '{}' (request {} superseded by {})",
                word,
                request_id,
                self.definition_request_id
            );
            return;
        }
        self.live_definition = None;

        match result {
            Err(e) => {
                log::warn!("Definition fetch for '{}' failed: {}", word, e);
                self.last_transport_failure = Some(e);
            }
            Ok(definitions) if definitions.is_empty() => {
                self.set_definitions(Vec::new());
                self.notification.show(
                    &format!("No definition found for \"{}\"", word),
                    NotificationKind::Info,
                    self.not_found_timeout,
                );
                for listener in &mut self.not_found_listeners {
                    listener(word);
                }
            }
            Ok(definitions) => self.set_definitions(definitions),
        }
    }

    /// Expire notifications; returns true if anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notification.clear_if_expired(now)
    }

    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notification
            .show(message, kind, self.not_found_timeout);
    }

    // ---------------------------------------------------------------------
    // Listeners
    // ---------------------------------------------------------------------

    pub fn on_candidates_changed(&mut self, listener: impl FnMut(&[Candidate], usize) + 'static) {
        self.candidates_listeners.push(Box::new(listener));
    }

    pub fn on_definitions_changed(&mut self, listener: impl FnMut(&[Definition]) + 'static) {
        self.definitions_listeners.push(Box::new(listener));
    }

    pub fn on_no_definition_found(&mut self, listener: impl FnMut(&str) + 'static) {
        self.not_found_listeners.push(Box::new(listener));
    }

    fn emit_candidates_changed(&mut self) {
        let candidates = self.candidates.as_ref().map_or(&[][..], CandidateList::items);
        let selected = self.selection.selected_index();
        for listener in &mut self.candidates_listeners {
            listener(candidates, selected);
        }
    }

    // ---------------------------------------------------------------------
    // State
    // ---------------------------------------------------------------------

    fn clear_suggestions(&mut self) {
        self.gate.invalidate();
        self.selection.reset(0);
        if self.candidates.is_some() {
            self.replace_candidates(None);
        }
    }

    fn replace_candidates(&mut self, list: Option<CandidateList>) {
        self.selection
            .reset(list.as_ref().map_or(0, CandidateList::len));
        self.candidates = list;
        self.emit_candidates_changed();
    }

    fn set_definitions(&mut self, definitions: Vec<Definition>) {
        self.definitions = definitions;
        for listener in &mut self.definitions_listeners {
            listener(&self.definitions);
        }
    }

    fn set_text(&mut self, text: &str) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.candidates.as_ref().map_or(&[][..], CandidateList::items)
    }

    /// A fresh result arrived and it had nothing to suggest
    pub fn has_no_suggestions(&self) -> bool {
        self.candidates.as_ref().is_some_and(CandidateList::is_empty)
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn has_pending_query(&self) -> bool {
        self.gate.has_pending()
    }

    pub fn is_defining(&self) -> bool {
        self.live_definition.is_some()
    }

    pub fn last_transport_failure(&self) -> Option<&LookupError> {
        self.last_transport_failure.as_ref()
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
