//! Typed mirror of the charting runtime's options object.
//!
//! Field names serialize to the runtime's camelCase keys. Optional fields
//! are omitted when `None` so the runtime applies its own defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// Position or size given either in pixels or as a percentage string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offset {
    Px(f64),
    Percent(String),
}

impl Offset {
    #[must_use]
    pub fn px(value: f64) -> Self {
        Self::Px(value)
    }

    #[must_use]
    pub fn percent(value: f64) -> Self {
        Self::Percent(format!("{value}%"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Bold,
    Bolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orient {
    Horizontal,
    Vertical,
}

/// Shared text style record; unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<[f64; 4]>,
}

impl TextStyle {
    #[must_use]
    pub fn sized(font_size: u32) -> Self {
        Self {
            font_size: Some(font_size),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleOptions {
    pub text: String,
    pub left: Offset,
    pub top: Offset,
    pub text_align: TextAlign,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendKind {
    Plain,
    Scroll,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    #[serde(rename = "type")]
    pub kind: LegendKind,
    pub orient: Orient,
    pub bottom: Offset,
    pub item_height: u32,
    pub item_width: u32,
    pub text_style: TextStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    Value,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLocation {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTickOptions {
    pub interval: u32,
    pub show: bool,
    pub align_with_label: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_overlap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_max_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_min_label: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLineOptions {
    pub line_style: LineStyle,
}

/// Numeric (`type: "value"`) axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxisOptions {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_location: Option<NameLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_text_style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub interval: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_line: Option<Toggle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<AxisTickOptions>,
    pub axis_label: AxisLabelOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<AxisLineOptions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
}

/// One bar sample: a raw value or an explicit `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BarDatum {
    Value(f64),
    Point([f64; 2]),
}

impl BarDatum {
    /// The plotted (y) value.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Value(value) => value,
            Self::Point([_, value]) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarkArea {}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisFocus {
    None,
    #[serde(rename = "self")]
    Itself,
    Series,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emphasis {
    pub focus: EmphasisFocus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeriesOptions {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<BarDatum>,
    pub mark_area: MarkArea,
    pub show_symbol: bool,
    pub smooth: bool,
    pub bar_width: Offset,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_max_width: Option<Offset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_category_gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAsImage {
    pub pixel_ratio: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeature {
    pub save_as_image: SaveAsImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolboxOptions {
    pub feature: ToolboxFeature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub contain_label: bool,
    pub left: Offset,
    pub right: Offset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicKind {
    Group,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicTextStyle {
    pub text: String,
    pub font: String,
    pub fill: String,
}

/// Free-positioned text element drawn outside the plot area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicText {
    #[serde(rename = "type")]
    pub kind: GraphicKind,
    pub right: f64,
    pub top: f64,
    pub style: GraphicTextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphicGroup {
    #[serde(rename = "type")]
    pub kind: GraphicKind,
    pub elements: Vec<GraphicText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipTrigger {
    Item,
    Axis,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPointerKind {
    Line,
    Shadow,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisPointer {
    #[serde(rename = "type")]
    pub kind: AxisPointerKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub trigger: TooltipTrigger,
    pub show: bool,
    pub text_style: TextStyle,
    pub axis_pointer: AxisPointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AriaOptions {
    pub enabled: bool,
    pub decal: Toggle,
}

/// Complete options object handed to the charting runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: TitleOptions,
    pub legend: LegendOptions,
    pub x_axis: ValueAxisOptions,
    pub y_axis: ValueAxisOptions,
    pub series: Vec<BarSeriesOptions>,
    pub toolbox: ToolboxOptions,
    pub grid: GridOptions,
    pub graphic: GraphicGroup,
    pub tooltip: TooltipOptions,
    pub aria: AriaOptions,
    /// Host-supplied top-level keys merged verbatim into the output.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChartOptions {
    /// Adds or replaces a top-level key the builder does not model.
    ///
    /// Keys that collide with a modelled section are rejected, since the
    /// serialized object would otherwise carry the key twice.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> ChartResult<Self> {
        let key = key.into();
        if MODELLED_KEYS.contains(&key.as_str()) {
            return Err(ChartError::InvalidConfig(format!(
                "`{key}` is built by the options builder and cannot be overridden as an extra"
            )));
        }
        self.extra.insert(key, value);
        Ok(self)
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))
    }
}

const MODELLED_KEYS: [&str; 10] = [
    "title", "legend", "xAxis", "yAxis", "series", "toolbox", "grid", "graphic", "tooltip",
    "aria",
];
