use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AveragingStrategy;
use crate::error::{ChartError, ChartResult};

/// Preset bundle of builder behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChartVariant {
    /// Bars bucketed on a stepped value axis, one stack per entity.
    #[default]
    Stacked,
    /// Raw values at full bar width, unstacked, channel-pair averaging.
    Overlapped,
}

impl FromStr for ChartVariant {
    type Err = ChartError;

    fn from_str(input: &str) -> ChartResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "stacked" | "a" => Ok(Self::Stacked),
            "overlapped" | "b" => Ok(Self::Overlapped),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown chart variant `{other}` (expected `stacked` or `overlapped`)"
            ))),
        }
    }
}

/// How the x-axis range is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AxisRangeStrategy {
    /// `min = 0`, `max = len(first series) * step`, `interval = step`.
    #[default]
    DataLengthTimesStep,
    /// Only `interval = step`; the runtime picks the bounds.
    FixedInterval,
}

/// How bar series are laid out relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StackingStrategy {
    /// Each sample is re-bucketed at `i * step` and every entity gets its
    /// own stack group.
    #[default]
    PerEntity,
    /// Samples are plotted as-is at 100% bar width without stacking.
    Unstacked,
}

/// Placement of the averages overlay in the right-hand grid margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayLayout {
    pub right: f64,
    pub base_top: f64,
    pub line_step: f64,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            right: 40.0,
            base_top: 250.0,
            line_step: 20.0,
        }
    }
}

impl OverlayLayout {
    /// Top offset of the overlay line for entity `index`.
    #[must_use]
    pub fn top_for(self, index: usize) -> f64 {
        self.base_top + index as f64 * self.line_step
    }
}

/// Builder configuration enumerating every point where chart variants differ.
///
/// Serializable so hosts can keep chart setup next to their data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    pub axis_range: AxisRangeStrategy,
    pub stacking: StackingStrategy,
    pub averaging: AveragingStrategy,
    pub x_step: f64,
    pub y_interval: f64,
    pub legend_lists_entities: bool,
    pub title_text: String,
    pub x_axis_name: String,
    pub overlay: OverlayLayout,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::for_variant(ChartVariant::default())
    }
}

impl BuilderConfig {
    /// Returns the preset for `variant`.
    #[must_use]
    pub fn for_variant(variant: ChartVariant) -> Self {
        let (axis_range, stacking, averaging) = match variant {
            ChartVariant::Stacked => (
                AxisRangeStrategy::DataLengthTimesStep,
                StackingStrategy::PerEntity,
                AveragingStrategy::SimpleMean,
            ),
            ChartVariant::Overlapped => (
                AxisRangeStrategy::FixedInterval,
                StackingStrategy::Unstacked,
                AveragingStrategy::ChannelPair,
            ),
        };
        Self {
            axis_range,
            stacking,
            averaging,
            x_step: 10.0,
            y_interval: 25.0,
            legend_lists_entities: true,
            title_text: "International wealth index (IWI)".to_owned(),
            x_axis_name: "IWI Score (0-100)".to_owned(),
            overlay: OverlayLayout::default(),
        }
    }

    #[must_use]
    pub fn with_axis_range(mut self, strategy: AxisRangeStrategy) -> Self {
        self.axis_range = strategy;
        self
    }

    #[must_use]
    pub fn with_stacking(mut self, strategy: StackingStrategy) -> Self {
        self.stacking = strategy;
        self
    }

    #[must_use]
    pub fn with_averaging(mut self, strategy: AveragingStrategy) -> Self {
        self.averaging = strategy;
        self
    }

    #[must_use]
    pub fn with_x_step(mut self, step: f64) -> Self {
        self.x_step = step;
        self
    }

    #[must_use]
    pub fn with_y_interval(mut self, interval: f64) -> Self {
        self.y_interval = interval;
        self
    }

    #[must_use]
    pub fn with_legend_lists_entities(mut self, enabled: bool) -> Self {
        self.legend_lists_entities = enabled;
        self
    }

    #[must_use]
    pub fn with_title_text(mut self, text: impl Into<String>) -> Self {
        self.title_text = text.into();
        self
    }

    #[must_use]
    pub fn with_x_axis_name(mut self, name: impl Into<String>) -> Self {
        self.x_axis_name = name.into();
        self
    }

    #[must_use]
    pub fn with_overlay_layout(mut self, layout: OverlayLayout) -> Self {
        self.overlay = layout;
        self
    }

    /// Checks numeric tunables.
    ///
    /// Builders accept any config; this is for loaders reading config files.
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("x_step", self.x_step),
            ("y_interval", self.y_interval),
            ("overlay.line_step", self.overlay.line_step),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        for (field, value) in [
            ("overlay.right", self.overlay.right),
            ("overlay.base_top", self.overlay.base_top),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidConfig(format!(
                    "`{field}` must be finite"
                )));
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; absent fields fall back to the
    /// `Stacked` preset.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
