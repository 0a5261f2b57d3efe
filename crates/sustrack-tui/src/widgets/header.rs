//! Header bar showing the app title, the calculation endpoint and keybindings

/// Application title
pub const TITLE: &str = "Sustainability Tracker – AI Copilot";

/// One-line usage hint under the title
pub const SUBTITLE: &str =
    "Click a topic or enter daily activities to estimate carbon footprint and get recommendations.";

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use sustrack_app::state::Panel;

use crate::theme::{icons::IconSet, palette, styles};

pub struct MainHeader<'a> {
    endpoint: &'a str,
    focus: Panel,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: &'a str, focus: Panel, icons: IconSet) -> Self {
        Self {
            endpoint,
            focus,
            icons,
        }
    }

    fn shortcuts(&self) -> Vec<Span<'static>> {
        let hints: &[(&str, &str)] = match self.focus {
            Panel::Topics => &[("Tab", "Form"), ("Enter", "Open"), ("q", "Quit")],
            Panel::Form => &[("Tab", "Topics"), ("Enter", "Calculate"), ("^C", "Quit")],
        };
        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        spans
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::raw(self.icons.seedling()),
            Span::raw(" "),
            Span::styled(TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.endpoint, styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let right = Line::from(self.shortcuts());
        let right_width = right.width() as u16;

        Paragraph::new(left).render(inner, buf);

        // Shortcuts only when they fit to the right of the title
        if left_width + right_width + 2 <= inner.width {
            let right_area = Rect {
                x: inner.x + inner.width - right_width,
                y: inner.y,
                width: right_width,
                height: 1,
            };
            Paragraph::new(right).render(right_area, buf);
        }

        if inner.height > 1 {
            let subtitle_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(SUBTITLE, styles::text_muted()),
            ]))
            .render(subtitle_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use sustrack_app::config::IconMode;

    #[test]
    fn test_header_shows_title_and_endpoint() {
        let mut term = TestTerminal::with_size(140, 4);
        let header = MainHeader::new(
            "http://127.0.0.1:8000/calculate",
            Panel::Topics,
            IconSet::new(IconMode::Ascii),
        );
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Sustainability Tracker – AI Copilot"));
        assert!(term.buffer_contains("http://127.0.0.1:8000/calculate"));
        assert!(term.buffer_contains("] Open"));
    }

    #[test]
    fn test_header_shows_subtitle_on_second_row() {
        let mut term = TestTerminal::with_size(120, 4);
        let header = MainHeader::new("http://x", Panel::Topics, IconSet::new(IconMode::Ascii));
        term.render_widget(header, term.area());

        assert!(term.line_contains(2, "Click a topic or enter daily activities"));
        assert!(!term.line_contains(1, "Click a topic"));
    }

    #[test]
    fn test_header_without_room_skips_subtitle() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = MainHeader::new("http://x", Panel::Topics, IconSet::new(IconMode::Ascii));
        term.render_widget(header, term.area());

        assert!(term.buffer_contains("AI Copilot"));
        assert!(!term.buffer_contains("Click a topic"));
    }

    #[test]
    fn test_header_shortcuts_follow_focus() {
        let mut term = TestTerminal::with_size(120, 3);
        let header = MainHeader::new("http://x", Panel::Form, IconSet::new(IconMode::Ascii));
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("] Calculate"));
    }

    #[test]
    fn test_header_drops_shortcuts_when_narrow() {
        let mut term = TestTerminal::with_size(50, 3);
        let header = MainHeader::new(
            "http://127.0.0.1:8000/calculate",
            Panel::Topics,
            IconSet::new(IconMode::Ascii),
        );
        term.render_widget(header, term.area());
        assert!(!term.buffer_contains("Quit"));
    }
}
