use tracing::{debug, warn};

use crate::core::{DataTable, PALETTE};

use super::{BuilderConfig, ChartOptions, ChartVariant};

/// Options builder bound to one data table.
///
/// Each section method is a pure read of the table and config; nothing is
/// cached or written back, so calling them in any order or repeatedly
/// yields the same output.
#[derive(Debug, Clone)]
pub struct BarChartBuilder<'a> {
    pub(super) table: &'a DataTable,
    pub(super) config: BuilderConfig,
}

impl<'a> BarChartBuilder<'a> {
    #[must_use]
    pub fn new(table: &'a DataTable, config: BuilderConfig) -> Self {
        Self { table, config }
    }

    /// Builder using the preset for `variant`.
    #[must_use]
    pub fn for_variant(table: &'a DataTable, variant: ChartVariant) -> Self {
        Self::new(table, BuilderConfig::for_variant(variant))
    }

    #[must_use]
    pub fn table(&self) -> &'a DataTable {
        self.table
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Assembles every section into the final options object.
    #[must_use]
    pub fn build(&self) -> ChartOptions {
        if self.table.len() > PALETTE.len() {
            warn!(
                entities = self.table.len(),
                palette = PALETTE.len(),
                "more entities than palette colors; extra series fall back to runtime colors"
            );
        }

        let options = ChartOptions {
            title: self.title(),
            legend: self.legend(),
            x_axis: self.x_axis(),
            y_axis: self.y_axis(),
            series: self.series(),
            toolbox: self.toolbox(),
            grid: self.grid(),
            graphic: self.overlay(),
            tooltip: self.tooltip(),
            aria: self.aria(),
            extra: Default::default(),
        };
        debug!(
            entities = self.table.len(),
            series = options.series.len(),
            axis_range = ?self.config.axis_range,
            stacking = ?self.config.stacking,
            averaging = ?self.config.averaging,
            "built chart options"
        );
        options
    }
}
