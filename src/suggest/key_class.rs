//! Key categories understood by the suggestion controller

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCategory {
    /// Never changes text or state
    Ignored,
    /// Moves the caret inside the input, never queries
    Cursor,
    /// Moves the highlighted candidate
    Navigation(Direction),
    /// Confirms the current word
    Commit,
    /// Edits the input text
    Content,
}

impl KeyCategory {
    pub fn classify(key: &KeyEvent) -> Self {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
        {
            return KeyCategory::Ignored;
        }

        match key.code {
            KeyCode::Up => KeyCategory::Navigation(Direction::Up),
            KeyCode::Down => KeyCategory::Navigation(Direction::Down),
            KeyCode::Enter => KeyCategory::Commit,
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete => KeyCategory::Content,
            KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End => KeyCategory::Cursor,
            _ => KeyCategory::Ignored,
        }
    }
}
