use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::App;
use crate::notification::render_notification;
use crate::suggest::suggest_render;

const HELP_TEXT: &str = "Enter: define | Up/Down: select | PgUp/PgDn: scroll | Esc: quit";
const EMPTY_HINT: &str = "Start typing to see suggestions, Enter to look up a word.";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (input_area, definitions_area, help_area) = (layout[0], layout[1], layout[2]);

        self.regions.clear();
        self.regions.input_field = Some(input_area);
        self.regions.definitions = Some(definitions_area);
        self.regions.help_line = Some(help_area);

        self.render_input(frame, input_area);
        self.render_definitions(frame, definitions_area);
        render_help_line(frame, help_area);

        // Popups go last so they draw over the definitions pane
        self.regions.suggestions = suggest_render::render_popup(&self.controller, frame, input_area);
        render_notification(frame, self.controller.notification());
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.controller.has_pending_query() {
            " Word (searching...) "
        } else {
            " Word "
        };

        let textarea = self.controller.textarea_mut();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(&*textarea, area);
    }

    fn render_definitions(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Definitions ")
            .border_style(Style::default().fg(Color::DarkGray));

        let lines: Vec<Line> = if self.controller.is_defining() {
            vec![Line::from(Span::styled(
                "Looking up...",
                Style::default().fg(Color::Yellow),
            ))]
        } else if self.controller.definitions().is_empty() {
            vec![Line::from(Span::styled(
                EMPTY_HINT,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.controller
                .definitions()
                .iter()
                .flat_map(|definition| {
                    let mut heading = vec![Span::styled(
                        definition.word.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )];
                    if !definition.part_of_speech.is_empty() {
                        heading.push(Span::styled(
                            format!(" ({})", definition.part_of_speech),
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::ITALIC),
                        ));
                    }
                    [
                        Line::from(heading),
                        Line::from(format!("  {}", definition.definition_text)),
                        Line::default(),
                    ]
                })
                .collect()
        };

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.definitions_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
