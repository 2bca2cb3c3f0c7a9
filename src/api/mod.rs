mod axis_builder;
mod builder_config;
mod chart_builder;
pub mod options;
mod overlay_builder;
mod section_builders;
mod series_builder;

pub use builder_config::{
    AxisRangeStrategy, BuilderConfig, ChartVariant, OverlayLayout, StackingStrategy,
};
pub use chart_builder::BarChartBuilder;
pub use options::ChartOptions;
pub use overlay_builder::overlay_text;
