//! iwi-chart: bar-chart option builder.
//!
//! Turns an ordered table of named value series ("villages") into the
//! options object a JavaScript charting runtime expects: title, axes, legend,
//! one bar series per entity, tooltip, toolbox, grid, ARIA flags and a text
//! overlay listing each entity's average.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BarChartBuilder, BuilderConfig, ChartOptions, ChartVariant};
pub use error::{ChartError, ChartResult};
