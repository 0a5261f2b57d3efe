//! Detail view for the selected topic

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sustrack_core::{AssetCatalog, Topic};

use crate::theme::{icons::IconSet, styles};

use super::image_slot::ImageSlot;

pub struct TopicDetail<'a> {
    topic: &'a Topic,
    assets: &'a AssetCatalog,
    focused: bool,
    icons: IconSet,
}

impl<'a> TopicDetail<'a> {
    pub fn new(topic: &'a Topic, assets: &'a AssetCatalog, icons: IconSet) -> Self {
        Self {
            topic,
            assets,
            focused: false,
            icons,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TopicDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(format!(" {} ", self.topic.name));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [back, heading, description, images] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(inner);

        let back_style = if self.focused {
            styles::focused_selected()
        } else {
            styles::keybinding()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} Back to Topics ", self.icons.back()), back_style),
            Span::styled("  Esc", styles::text_muted()),
        ]))
        .render(back, buf);

        Paragraph::new(Line::from(Span::styled(
            self.topic.name.as_str(),
            styles::topic_heading(self.topic.color),
        )))
        .render(heading, buf);

        Paragraph::new(self.topic.description.as_str())
            .style(styles::text_primary())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        let primary = self.assets.status(&self.topic.image);
        let extra = self.assets.status(&self.topic.extra_image);

        if extra.is_available() {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .areas(images);
            ImageSlot::new(&self.topic.image, primary, self.icons).render(left, buf);
            ImageSlot::new(&self.topic.extra_image, extra, self.icons).render(right, buf);
        } else {
            ImageSlot::new(&self.topic.image, primary, self.icons).render(images, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::path::Path;
    use sustrack_app::config::IconMode;
    use sustrack_core::{AssetStatus, TopicRegistry};

    fn available() -> AssetStatus {
        AssetStatus::Available {
            width: 10,
            height: 20,
        }
    }

    fn render(topic: &Topic, assets: &AssetCatalog) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 20);
        term.render_widget(
            TopicDetail::new(topic, assets, IconSet::new(IconMode::Ascii)),
            term.area(),
        );
        term
    }

    #[test]
    fn test_detail_shows_back_heading_and_description() {
        let registry = TopicRegistry::builtin(Path::new("images"));
        let topic = registry.get("Water Usage").unwrap();
        let term = render(topic, &AssetCatalog::default());

        assert!(term.buffer_contains("Back to Topics"));
        assert!(term.buffer_contains("Water Usage"));
        assert!(term.buffer_contains("Tracks water consumption"));
    }

    #[test]
    fn test_both_images_side_by_side_when_extra_resolves() {
        let registry = TopicRegistry::builtin(Path::new("images"));
        let topic = registry.get("Energy Saving").unwrap();
        let mut assets = AssetCatalog::default();
        assets.insert(topic.image.clone(), available());
        assets.insert(topic.extra_image.clone(), available());

        let term = render(topic, &assets);
        assert!(term.buffer_contains("energy_saving.png (10x20)"));
        assert!(term.buffer_contains("energy_extra.png (10x20)"));
    }

    #[test]
    fn test_only_primary_when_extra_missing() {
        let registry = TopicRegistry::builtin(Path::new("images"));
        let topic = registry.get("Energy Saving").unwrap();
        let mut assets = AssetCatalog::default();
        assets.insert(topic.image.clone(), available());

        let term = render(topic, &assets);
        assert!(term.buffer_contains("energy_saving.png (10x20)"));
        assert!(!term.buffer_contains("energy_extra.png"));
        assert!(!term.buffer_contains("Image not found"));
    }

    #[test]
    fn test_missing_primary_is_a_warning() {
        let registry = TopicRegistry::builtin(Path::new("images"));
        let topic = registry.get("Carbon Footprint").unwrap();
        let term = render(topic, &AssetCatalog::default());
        assert!(term.buffer_contains("Image not found: images/carbon_footprint.png"));
    }

    #[test]
    fn test_same_topic_renders_identically() {
        let registry = TopicRegistry::builtin(Path::new("images"));
        let topic = registry.get("Waste Management").unwrap();
        let assets = AssetCatalog::default();
        assert_eq!(
            render(topic, &assets).content(),
            render(topic, &assets).content()
        );
    }
}
