//! Topic browser grid
//!
//! One card per registry entry, row-major in registry order. A missing image
//! only affects its own card.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sustrack_core::{AssetCatalog, Topic, TopicRegistry};

use crate::theme::{icons::IconSet, styles};

use super::image_slot::image_line;

pub struct TopicGrid<'a> {
    registry: &'a TopicRegistry,
    assets: &'a AssetCatalog,
    cursor: usize,
    columns: usize,
    focused: bool,
    icons: IconSet,
}

impl<'a> TopicGrid<'a> {
    pub fn new(registry: &'a TopicRegistry, assets: &'a AssetCatalog, icons: IconSet) -> Self {
        Self {
            registry,
            assets,
            cursor: 0,
            columns: 2,
            focused: false,
            icons,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn render_card(&self, topic: &Topic, highlighted: bool, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(topic.color, highlighted);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let explore_style = if highlighted {
            styles::topic_heading(topic.color)
        } else {
            styles::text_secondary()
        };
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", topic.name),
                styles::topic_badge(topic.color),
            )),
            Line::from(Span::styled(format!("Explore {}", topic.name), explore_style)),
            image_line(&topic.image, &self.assets.status(&topic.image), self.icons),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

impl Widget for TopicGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Topics ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.registry.is_empty() || inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = self.registry.len().div_ceil(self.columns);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);
        let topics: Vec<&Topic> = self.registry.iter().collect();

        for (row, row_area) in row_areas.iter().enumerate() {
            let cells = Layout::horizontal(vec![
                Constraint::Ratio(1, self.columns as u32);
                self.columns
            ])
            .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row * self.columns + col;
                if let Some(topic) = topics.get(index) {
                    let highlighted = self.focused && index == self.cursor;
                    self.render_card(topic, highlighted, *cell, buf);
                }
            }
        }
    }
}
