//! Region tracking for position-aware mouse interactions
//!
//! `LayoutRegions` records where components were drawn on the last frame and
//! `region_at()` determines which component is at a given screen position.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Suggestions,
    Definitions,
    HelpLine,
}

#[derive(Debug, Clone, Default)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestions: Option<Rect>,
    pub definitions: Option<Rect>,
    pub help_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Find the topmost region containing the position
///
/// The suggestion popup overlays the definitions pane, so it wins.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let candidates = [
        (regions.suggestions, Region::Suggestions),
        (regions.input_field, Region::InputField),
        (regions.definitions, Region::Definitions),
        (regions.help_line, Region::HelpLine),
    ];

    candidates
        .into_iter()
        .find(|(area, _)| area.is_some_and(|a| contains(a, column, row)))
        .map(|(_, region)| region)
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
