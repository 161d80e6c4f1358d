#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::Config;
    use crate::lookup::{Definition, LookupError, LookupRequest, LookupResponse};
    use crate::suggest::{Query, SuggestionController, SuggestionResult};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// A controller wired to in-memory channels instead of the lookup worker
    pub struct ControllerHarness {
        pub controller: SuggestionController,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    impl ControllerHarness {
        pub fn type_str(&mut self, text: &str) {
            for c in text.chars() {
                self.controller.handle_key(key(KeyCode::Char(c)));
            }
        }

        pub fn press(&mut self, code: KeyCode) {
            self.controller.handle_key(key(code));
        }

        /// Every request sent since the last drain, oldest first
        pub fn drain_requests(&mut self) -> Vec<LookupRequest> {
            let mut drained = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                drained.push(request);
            }
            drained
        }

        /// Suggestion queries sent since the last drain
        pub fn issued_queries(&mut self) -> Vec<Query> {
            self.drain_requests()
                .into_iter()
                .filter_map(|request| match request {
                    LookupRequest::Suggest { query, .. } => Some(query),
                    LookupRequest::Define { .. } => None,
                })
                .collect()
        }

        /// Send a response through the channel and let the controller apply it
        pub fn deliver(&mut self, response: LookupResponse) {
            self.responses
                .send(response)
                .expect("controller receiver should be alive");
            self.controller.poll_responses();
        }

        pub fn deliver_suggestions(&mut self, sequence_id: u64, for_text: &str, words: &[&str]) {
            self.deliver(suggestions(sequence_id, for_text, words));
        }
    }

    pub fn controller_with_config(config: &Config) -> ControllerHarness {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        ControllerHarness {
            controller: SuggestionController::new(config, request_tx, response_rx),
            requests,
            responses,
        }
    }

    pub fn test_controller() -> ControllerHarness {
        controller_with_config(&Config::default())
    }

    pub struct AppHarness {
        pub app: App,
        pub requests: UnboundedReceiver<LookupRequest>,
        pub responses: Sender<LookupResponse>,
    }

    pub fn test_app() -> AppHarness {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        AppHarness {
            app: App::new(&Config::default(), request_tx, response_rx),
            requests,
            responses,
        }
    }

    pub fn suggestions(sequence_id: u64, for_text: &str, words: &[&str]) -> LookupResponse {
        LookupResponse::Suggestions {
            sequence_id,
            result: Ok(SuggestionResult::new(for_text, words)),
        }
    }

    pub fn definitions(request_id: u64, word: &str, found: &[(&str, &str)]) -> LookupResponse {
        LookupResponse::Definitions {
            request_id,
            word: word.to_string(),
            result: Ok(found
                .iter()
                .map(|(pos, text)| Definition::new(word, pos, text))
                .collect()),
        }
    }

    pub fn network_failure(sequence_id: u64) -> LookupResponse {
        LookupResponse::Suggestions {
            sequence_id,
            result: Err(LookupError::Network("connection refused".to_string())),
        }
    }

    /// Render the app into a test backend and return its text, one line per
    /// row with trailing blanks trimmed
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| app.render(frame))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                let line: String = (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
