//! Mouse click handling
//!
//! A left click on a suggestion commits it, exactly like Enter would.

use crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::Region;
use crate::suggest::suggest_render;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if region == Some(Region::Suggestions) {
        click_suggestions(app, mouse);
    }
}

fn click_suggestions(app: &mut App, mouse: MouseEvent) {
    let Some(popup_area) = app.regions.suggestions else {
        return;
    };

    let controller = &app.controller;
    let Some(value) = suggest_render::candidate_under(controller, popup_area, mouse.column, mouse.row)
        .and_then(|index| controller.candidates().get(index))
        .map(|candidate| candidate.text.clone())
    else {
        return;
    };

    app.definitions_scroll = 0;
    app.controller.handle_candidate_click(&value);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
