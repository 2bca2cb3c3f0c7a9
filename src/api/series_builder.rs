use crate::core::{VillageRecord, palette_color};

use super::options::{
    BarDatum, BarSeriesOptions, Emphasis, EmphasisFocus, ItemStyle, MarkArea, Offset, SeriesKind,
};
use super::{BarChartBuilder, StackingStrategy};

const STACKED_BAR_WIDTH_PX: f64 = 15.0;

impl BarChartBuilder<'_> {
    /// One bar series per record, in table order.
    #[must_use]
    pub fn series(&self) -> Vec<BarSeriesOptions> {
        self.table
            .iter()
            .enumerate()
            .map(|(index, record)| self.bar_series(index, record))
            .collect()
    }

    fn bar_series(&self, index: usize, record: &VillageRecord) -> BarSeriesOptions {
        let item_style = ItemStyle {
            color: palette_color(index).map(str::to_owned),
        };
        let mut series = BarSeriesOptions {
            name: record.name.clone(),
            kind: SeriesKind::Bar,
            data: Vec::new(),
            mark_area: MarkArea::default(),
            show_symbol: false,
            smooth: false,
            bar_width: Offset::percent(100.0),
            bar_max_width: None,
            bar_gap: None,
            bar_category_gap: None,
            stack: None,
            item_style,
            emphasis: Emphasis {
                focus: EmphasisFocus::Series,
            },
        };

        match self.config.stacking {
            StackingStrategy::PerEntity => {
                let step = self.config.x_step;
                series.data = record
                    .data
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| BarDatum::Point([i as f64 * step, value]))
                    .collect();
                series.bar_width = Offset::px(STACKED_BAR_WIDTH_PX);
                series.bar_max_width = Some(Offset::px(STACKED_BAR_WIDTH_PX));
                series.bar_gap = Some("30%".to_owned());
                series.bar_category_gap = Some("20%".to_owned());
                series.stack = Some(format!("Village {}", index + 1));
            }
            StackingStrategy::Unstacked => {
                series.data = record.data.iter().copied().map(BarDatum::Value).collect();
            }
        }
        series
    }
}
