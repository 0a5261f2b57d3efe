//! Result panel: emissions breakdown, total and recommendations
//!
//! Shows exactly one of: an idle hint, a spinner, the full breakdown, or a
//! single error banner. A failure never renders any result subsection.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use sustrack_app::calculation::CalculationState;
use sustrack_core::{format_amount, EmissionsResult};

use crate::theme::{icons::IconSet, styles};

/// Prefix of the failure banner
pub const ERROR_PREFIX: &str = "Could not calculate emissions:";

pub struct ResultsPanel<'a> {
    calculation: &'a CalculationState,
    tick: u64,
    icons: IconSet,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(calculation: &'a CalculationState, icons: IconSet) -> Self {
        Self {
            calculation,
            tick: 0,
            icons,
        }
    }

    /// Animation frame for the spinner
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    fn heading(&self, icon: &str, title: &str) -> Line<'static> {
        Line::from(Span::styled(format!("{} {}", icon, title), styles::accent_bold()))
    }

    fn result_lines(&self, result: &EmissionsResult) -> Vec<Line<'static>> {
        let mut lines = vec![self.heading(self.icons.leaf(), "Category-wise Carbon Footprint")];
        for emission in &result.emissions {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", emission.category), styles::text_secondary()),
                Span::styled(format_amount(emission.kg_co2), styles::metric_value()),
                Span::styled(" kg CO₂", styles::text_secondary()),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(self.heading(self.icons.globe(), "Total Carbon Footprint"));
        lines.push(Line::from(vec![
            Span::styled("  Total CO₂ Emissions (kg): ", styles::text_secondary()),
            Span::styled(format_amount(result.total_carbon), styles::metric_value()),
        ]));

        if result.has_recommendations() {
            lines.push(Line::from(""));
            lines.push(self.heading(self.icons.bulb(), "Recommendations by Category"));
            for rec in &result.recommendations {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {}: ", rec.category), styles::text_secondary()),
                    Span::styled(rec.text.clone(), styles::text_primary()),
                ]));
            }
        }

        lines.push(Line::from(""));
        lines.push(self.heading(self.icons.memo(), "Overall Recommendation"));
        for text in &result.overall_recommendations {
            lines.push(Line::from(Span::styled(
                format!("  - {}", text),
                styles::text_primary(),
            )));
        }

        lines
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Results ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.calculation {
            CalculationState::Idle => vec![Line::from(Span::styled(
                "Fill in your daily activities, then calculate.",
                styles::text_muted(),
            ))],
            CalculationState::Pending { .. } => vec![Line::from(vec![
                Span::styled(self.icons.spinner(self.tick), styles::accent_bold()),
                Span::styled(" Calculating…", styles::text_secondary()),
            ])],
            CalculationState::Failed { error, .. } => vec![Line::from(Span::styled(
                format!("{} {}", ERROR_PREFIX, error),
                styles::status_red(),
            ))],
            CalculationState::Succeeded { result, .. } => self.result_lines(result),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
