use crate::core::{EntityAverage, FALLBACK_TEXT_COLOR, compute_averages, palette_color};

use super::BarChartBuilder;
use super::options::{GraphicGroup, GraphicKind, GraphicText, GraphicTextStyle};

const OVERLAY_FONT: &str = "20px Arial";

impl BarChartBuilder<'_> {
    /// Per-entity averages using the configured strategy.
    #[must_use]
    pub fn averages(&self) -> Vec<EntityAverage> {
        compute_averages(self.table, self.config.averaging)
    }

    /// Text group listing each entity's average in the right-hand margin.
    #[must_use]
    pub fn overlay(&self) -> GraphicGroup {
        self.overlay_from(&self.averages())
    }

    /// Overlay for precomputed averages.
    ///
    /// Line `i` sits at `base_top + i * line_step`, using the palette color
    /// of the entity's index or black when the palette has run out.
    #[must_use]
    pub fn overlay_from(&self, averages: &[EntityAverage]) -> GraphicGroup {
        let layout = self.config.overlay;
        let elements = averages
            .iter()
            .enumerate()
            .map(|(line, entry)| GraphicText {
                kind: GraphicKind::Text,
                right: layout.right,
                top: layout.top_for(line),
                style: GraphicTextStyle {
                    text: overlay_text(entry),
                    font: OVERLAY_FONT.to_owned(),
                    fill: palette_color(entry.index)
                        .unwrap_or(FALLBACK_TEXT_COLOR)
                        .to_owned(),
                },
            })
            .collect();

        GraphicGroup {
            kind: GraphicKind::Group,
            elements,
        }
    }
}

/// `"<name> Avg. unit: <average>"`.
#[must_use]
pub fn overlay_text(entry: &EntityAverage) -> String {
    format!("{} Avg. unit: {}", entry.name, entry.display_value())
}
