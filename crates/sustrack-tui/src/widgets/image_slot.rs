//! Image placeholders
//!
//! Terminals cannot show the topic pictures, so a resolved image is drawn as
//! its file name and pixel size. An unresolved one becomes a warning line.

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sustrack_core::AssetStatus;

use crate::theme::{icons::IconSet, styles};

/// One-line description of an image slot
pub fn image_line(path: &Path, status: &AssetStatus, icons: IconSet) -> Line<'static> {
    match status {
        AssetStatus::Available { width, height } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Line::from(vec![
                Span::raw(format!("{} ", icons.image())),
                Span::styled(name, styles::text_primary()),
                Span::styled(format!(" ({}x{})", width, height), styles::text_muted()),
            ])
        }
        AssetStatus::Missing { .. } => Line::from(vec![
            Span::styled(format!("{} ", icons.alert()), styles::status_yellow()),
            Span::styled(
                format!("Image not found: {}", path.display()),
                styles::status_red(),
            ),
        ]),
    }
}

/// Bordered box holding one image placeholder, used by the detail view
pub struct ImageSlot<'a> {
    path: &'a Path,
    status: AssetStatus,
    icons: IconSet,
}

impl<'a> ImageSlot<'a> {
    pub fn new(path: &'a Path, status: AssetStatus, icons: IconSet) -> Self {
        Self {
            path,
            status,
            icons,
        }
    }
}

impl Widget for ImageSlot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Vertically center the single placeholder line
        let line_area = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: inner.height - inner.height.saturating_sub(1) / 2,
            ..inner
        };
        Paragraph::new(image_line(self.path, &self.status, self.icons))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(line_area, buf);
    }
}
