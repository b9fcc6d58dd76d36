mod layout;
mod panels;

use crate::tui::app::AppState;
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    panels::draw_advisor(f, app);
    if app.help_open() {
        panels::draw_help(f);
    }
}
