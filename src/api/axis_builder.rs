use super::options::{
    AxisKind, AxisLabelOptions, AxisLineOptions, AxisTickOptions, FontWeight, LineStyle,
    NameLocation, TextAlign, TextStyle, Toggle, ValueAxisOptions, VerticalAlign,
};
use super::{AxisRangeStrategy, BarChartBuilder};

const AXIS_LABEL_COLOR: &str = "#A9A9A9";
const AXIS_LABEL_FONT_SIZE: u32 = 18;
const X_AXIS_NAME_GAP: f64 = -380.0;

impl BarChartBuilder<'_> {
    /// Horizontal value axis.
    ///
    /// With `DataLengthTimesStep` the range spans `0..=len * step` where
    /// `len` is the sample count of the first record; an empty table leaves
    /// `max` unset.
    #[must_use]
    pub fn x_axis(&self) -> ValueAxisOptions {
        let step = self.config.x_step;
        let (min, max) = match self.config.axis_range {
            AxisRangeStrategy::DataLengthTimesStep => (
                Some(0.0),
                self.table.first_series_len().map(|len| len as f64 * step),
            ),
            AxisRangeStrategy::FixedInterval => (None, None),
        };

        ValueAxisOptions {
            kind: AxisKind::Value,
            name: Some(self.config.x_axis_name.clone()),
            name_location: Some(NameLocation::End),
            name_text_style: Some(TextStyle {
                align: Some(TextAlign::Right),
                vertical_align: Some(VerticalAlign::Top),
                font_weight: Some(FontWeight::Bold),
                padding: Some([40.0, 0.0, 0.0, 0.0]),
                ..TextStyle::default()
            }),
            name_gap: Some(X_AXIS_NAME_GAP),
            min,
            max,
            interval: step,
            split_line: Some(Toggle { show: false }),
            axis_tick: Some(AxisTickOptions {
                interval: 0,
                show: true,
                align_with_label: true,
            }),
            axis_label: AxisLabelOptions {
                color: Some(AXIS_LABEL_COLOR.to_owned()),
                font_size: Some(AXIS_LABEL_FONT_SIZE),
                ..AxisLabelOptions::default()
            },
            axis_line: None,
        }
    }

    /// Vertical value axis with percentage labels.
    #[must_use]
    pub fn y_axis(&self) -> ValueAxisOptions {
        ValueAxisOptions {
            kind: AxisKind::Value,
            name: None,
            name_location: None,
            name_text_style: Some(TextStyle {
                font_size: Some(12),
                font_weight: Some(FontWeight::Bolder),
                ..TextStyle::default()
            }),
            name_gap: None,
            min: None,
            max: None,
            interval: self.config.y_interval,
            split_line: None,
            axis_tick: None,
            axis_label: AxisLabelOptions {
                formatter: Some("{value}%".to_owned()),
                hide_overlap: Some(true),
                show_max_label: Some(true),
                show_min_label: Some(true),
                color: Some(AXIS_LABEL_COLOR.to_owned()),
                font_size: Some(AXIS_LABEL_FONT_SIZE),
            },
            axis_line: Some(AxisLineOptions {
                line_style: LineStyle {
                    color: "black".to_owned(),
                },
            }),
        }
    }
}
