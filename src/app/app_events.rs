use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::mouse_click;
use crate::layout::{self, Region};

const PAGE_SCROLL: u16 = 10;
const WHEEL_SCROLL: u16 = 3;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Only key presses; repeats and releases would double-apply edits
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.controller.handle_paste(&text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }
        self.controller.handle_key(key);
    }

    /// Keys that belong to the application rather than the input field
    ///
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::PageDown => {
                self.definitions_scroll = self.definitions_scroll.saturating_add(PAGE_SCROLL);
                true
            }
            KeyCode::PageUp => {
                self.definitions_scroll = self.definitions_scroll.saturating_sub(PAGE_SCROLL);
                true
            }
            // New definitions start at the top; the controller still commits
            KeyCode::Enter => {
                self.definitions_scroll = 0;
                false
            }
            _ => false,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = layout::region_at(&self.regions, mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => mouse_click::handle_click(self, region, mouse),
            MouseEventKind::ScrollDown if region == Some(Region::Definitions) => {
                self.definitions_scroll = self.definitions_scroll.saturating_add(WHEEL_SCROLL);
            }
            MouseEventKind::ScrollUp if region == Some(Region::Definitions) => {
                self.definitions_scroll = self.definitions_scroll.saturating_sub(WHEEL_SCROLL);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
