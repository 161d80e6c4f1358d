use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const NOTIFICATION_PADDING: u16 = 4;
const NOTIFICATION_HEIGHT: u16 = 3;
const NOTIFICATION_MARGIN: u16 = 1;

/// Render the current notification in the top-right corner
pub fn render_notification(frame: &mut Frame, notification: &NotificationState) {
    let Some(current) = notification.current() else {
        return;
    };

    let frame_area = frame.area();
    let width = (current.message.width() as u16 + NOTIFICATION_PADDING)
        .min(frame_area.width.saturating_sub(NOTIFICATION_MARGIN * 2));
    let area = Rect {
        x: frame_area
            .width
            .saturating_sub(width + NOTIFICATION_MARGIN),
        y: frame_area.y + NOTIFICATION_MARGIN,
        width,
        height: NOTIFICATION_HEIGHT.min(frame_area.height),
    };

    let border_color = match current.kind {
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
    };

    popup::clear_area(frame, area);
    let paragraph = Paragraph::new(current.message.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(paragraph, area);
}
