//! Activity form: six numeric inputs and the calculate button

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use sustrack_app::form::{ActivityFormState, FieldInput};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Label of the submit button
pub const SUBMIT_LABEL: &str = "Calculate Carbon Footprint";

/// Width reserved for the value column, borders of the input included
const VALUE_WIDTH: usize = 16;

pub struct ActivityForm<'a> {
    form: &'a ActivityFormState,
    focused: bool,
    pending: bool,
}

impl<'a> ActivityForm<'a> {
    pub fn new(form: &'a ActivityFormState) -> Self {
        Self {
            form,
            focused: false,
            pending: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Dim the button while a calculation is in flight
    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }

    fn field_line(&self, input: &FieldInput, active: bool, width: usize) -> Line<'static> {
        let label = input.field().label();
        let label_width = width.saturating_sub(VALUE_WIDTH).max(1);

        // Truncate labels that do not fit rather than wrapping the row
        let mut label_text = String::new();
        for c in label.chars() {
            if label_text.width() + 1 >= label_width {
                break;
            }
            label_text.push(c);
        }
        let padding = label_width.saturating_sub(label_text.width());

        let value = if active {
            format!("[{:>12}▏]", input.display())
        } else {
            format!("[{:>12} ]", input.display())
        };
        let value_style = if active {
            styles::focused_selected()
        } else if input.buffer().is_empty() {
            styles::text_muted()
        } else {
            styles::text_primary()
        };
        let label_style = if active {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };

        Line::from(vec![
            Span::styled(label_text, label_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(value, value_style),
        ])
    }

    fn submit_line(&self) -> Line<'static> {
        let style = if self.pending {
            styles::text_muted()
        } else if self.focused {
            styles::focused_selected()
        } else {
            styles::keybinding()
        };
        Line::from(vec![
            Span::styled(format!("[ {} ]", SUBMIT_LABEL), style),
            Span::styled("  Enter / Ctrl+S", styles::text_muted()),
        ])
    }
}

impl Widget for ActivityForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Daily Activities ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let mut lines: Vec<Line> = self
            .form
            .fields()
            .iter()
            .enumerate()
            .map(|(i, input)| {
                let active = self.focused && i == self.form.focused_index();
                self.field_line(input, active, width)
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(self.submit_line());

        Paragraph::new(lines).render(inner, buf);
    }
}
