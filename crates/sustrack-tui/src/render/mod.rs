//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use sustrack_app::state::{AppState, Panel};

use crate::theme::{icons::IconSet, palette};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: rendering the same state twice draws the
/// same frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(
        widgets::MainHeader::new(&state.endpoint_label, state.focus, icons),
        areas.header,
    );

    let topics_focused = state.focus == Panel::Topics;
    match state.selected_topic() {
        Some(topic) => frame.render_widget(
            widgets::TopicDetail::new(topic, &state.assets, icons).focused(topics_focused),
            areas.topics,
        ),
        None => frame.render_widget(
            widgets::TopicGrid::new(&state.registry, &state.assets, icons)
                .cursor(state.topic_cursor)
                .columns(state.topic_columns())
                .focused(topics_focused),
            areas.topics,
        ),
    }

    frame.render_widget(
        widgets::ActivityForm::new(&state.form)
            .focused(state.focus == Panel::Form)
            .pending(state.calculation.is_pending()),
        areas.form,
    );

    frame.render_widget(
        widgets::ResultsPanel::new(&state.calculation, icons).tick(state.tick_count),
        areas.results,
    );
}
