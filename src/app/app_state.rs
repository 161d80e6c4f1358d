use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::lookup::{LookupRequest, LookupResponse};
use crate::suggest::SuggestionController;

/// Application state
pub struct App {
    pub controller: SuggestionController,
    pub should_quit: bool,
    /// Vertical scroll of the definitions pane
    pub definitions_scroll: u16,
    /// Where components were drawn on the last frame, for mouse hit testing
    pub regions: LayoutRegions,
}

impl App {
    pub fn new(
        config: &Config,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) -> Self {
        Self {
            controller: SuggestionController::new(config, request_tx, response_rx),
            should_quit: false,
            definitions_scroll: 0,
            regions: LayoutRegions::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current input text
    pub fn word(&self) -> &str {
        self.controller.text()
    }

    /// Apply worker responses; returns true if anything arrived
    pub fn poll(&mut self) -> bool {
        self.controller.poll_responses() > 0
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
