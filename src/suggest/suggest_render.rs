//! Suggestion popup rendering
//!
//! Draws the candidate list directly below the input field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::controller::SuggestionController;
use super::query::CandidateKind;
use crate::widgets::popup;

const MIN_POPUP_WIDTH: usize = 20;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;
const TYPE_LABEL_SPACING: usize = 3;
const NO_SUGGESTIONS: &str = "no suggestions";

/// Render the suggestion popup below `input_area`
///
/// Returns the area that was drawn, if any, so clicks can be mapped back to
/// candidates.
pub fn render_popup(
    controller: &SuggestionController,
    frame: &mut Frame,
    input_area: Rect,
) -> Option<Rect> {
    if controller.has_no_suggestions() {
        return Some(render_empty(frame, input_area));
    }

    let candidates = controller.candidates();
    if candidates.is_empty() {
        return None;
    }

    let max_text_width = candidates
        .iter()
        .map(|c| c.text.width())
        .max()
        .unwrap_or(0);
    let label_width = format!("[{}]", CandidateKind::RawQuery).len();
    let content_width = (max_text_width + label_width + TYPE_LABEL_SPACING)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    let popup_height = u16::try_from(candidates.len())
        .unwrap_or(u16::MAX)
        .saturating_add(POPUP_BORDER_HEIGHT);

    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        content_width as u16 + POPUP_PADDING,
        popup_height,
        POPUP_OFFSET_X,
    );

    let highlighted = highlighted_index(controller);

    let items: Vec<ListItem> = candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let padding = " ".repeat(max_text_width.saturating_sub(candidate.text.width()));
            let label = match candidate.kind {
                CandidateKind::RawQuery => format!(" [{}]", candidate.kind),
                CandidateKind::Suggestion => String::new(),
            };

            let line = if highlighted == Some(i) {
                Line::from(vec![
                    Span::styled(
                        format!("► {}{}", candidate.text, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(label, Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}{}", candidate.text, padding),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(label, Style::default().fg(Color::DarkGray).bg(Color::Black)),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    // A popup clipped by the screen bottom scrolls to keep the highlight visible
    let mut state = ListState::default()
        .with_offset(scroll_offset(highlighted, popup_area))
        .with_selected(highlighted);
    frame.render_stateful_widget(list, popup_area, &mut state);

    Some(popup_area)
}

/// Nothing is highlighted while a newer query is outstanding
fn highlighted_index(controller: &SuggestionController) -> Option<usize> {
    (controller.selection().candidate_count() > 0).then(|| controller.selected_index())
}

/// First candidate shown in `popup_area` when `highlighted` must be visible
fn scroll_offset(highlighted: Option<usize>, popup_area: Rect) -> usize {
    let visible_rows = usize::from(popup_area.height.saturating_sub(POPUP_BORDER_HEIGHT)).max(1);
    highlighted.map_or(0, |index| (index + 1).saturating_sub(visible_rows))
}

/// Candidate under a screen position, accounting for popup scrolling
pub fn candidate_under(
    controller: &SuggestionController,
    popup_area: Rect,
    column: u16,
    row: u16,
) -> Option<usize> {
    let offset = scroll_offset(highlighted_index(controller), popup_area);
    let count = controller.candidates().len().saturating_sub(offset);
    candidate_at(popup_area, count, column, row).map(|index| index + offset)
}

fn render_empty(frame: &mut Frame, input_area: Rect) -> Rect {
    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        MIN_POPUP_WIDTH as u16 + POPUP_PADDING,
        1 + POPUP_BORDER_HEIGHT,
        POPUP_OFFSET_X,
    );

    popup::clear_area(frame, popup_area);
    let paragraph = Paragraph::new(format!("  {}", NO_SUGGESTIONS))
        .style(Style::default().fg(Color::DarkGray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestions ")
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(paragraph, popup_area);
    popup_area
}

/// Map a screen position inside the popup to a candidate index
pub fn candidate_at(popup_area: Rect, candidate_count: usize, column: u16, row: u16) -> Option<usize> {
    let inner_top = popup_area.y + 1;
    let inner_bottom = popup_area.y + popup_area.height.saturating_sub(1);
    let inside_x = column > popup_area.x && column + 1 < popup_area.x + popup_area.width;
    if !inside_x || row < inner_top || row >= inner_bottom {
        return None;
    }

    let index = (row - inner_top) as usize;
    (index < candidate_count).then_some(index)
}
