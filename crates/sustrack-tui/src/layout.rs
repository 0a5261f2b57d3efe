//! Screen layout definitions for the TUI
//!
//! Header on top, then the topic panel beside a column holding the activity
//! form over the results. Narrow terminals stack the three panels vertically.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the panels are stacked instead of placed side by side
pub const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Borders (2) + title row + subtitle row
pub const HEADER_HEIGHT: u16 = 2 + 2;

/// Borders (2) + six fields + blank row + submit button
pub const FORM_HEIGHT: u16 = 2 + 6 + 1 + 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, subtitle, endpoint and keybindings
    pub header: Rect,

    /// Topic grid or topic detail
    pub topics: Rect,

    /// Activity form
    pub form: Rect,

    /// Calculation results
    pub results: Rect,
}

/// Split the terminal into the main panels
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] =
        Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)]).areas(area);

    if area.width >= SIDE_BY_SIDE_MIN_WIDTH {
        let [topics, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
        let [form, results] =
            Layout::vertical([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)]).areas(right);
        ScreenAreas {
            header,
            topics,
            form,
            results,
        }
    } else {
        let [topics, form, results] = Layout::vertical([
            Constraint::Min(6),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(6),
        ])
        .areas(body);
        ScreenAreas {
            header,
            topics,
            form,
            results,
        }
    }
}
