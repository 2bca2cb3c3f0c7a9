//! Sections that depend on the table only through the entity names, or not
//! at all.

use super::BarChartBuilder;
use super::options::{
    AriaOptions, AxisPointer, AxisPointerKind, GridOptions, LegendKind, LegendOptions, Offset,
    Orient, SaveAsImage, TextAlign, TextStyle, TitleOptions, Toggle, ToolboxFeature,
    ToolboxOptions, TooltipOptions, TooltipTrigger,
};

impl BarChartBuilder<'_> {
    #[must_use]
    pub fn title(&self) -> TitleOptions {
        TitleOptions {
            text: self.config.title_text.clone(),
            left: Offset::percent(50.0),
            top: Offset::percent(-1.0),
            text_align: TextAlign::Center,
            text_style: TextStyle {
                color: Some("#000".to_owned()),
                font_size: Some(40),
                ..TextStyle::default()
            },
        }
    }

    /// Horizontal scrollable legend anchored to the bottom edge.
    ///
    /// `data` lists entity names in table order when enabled; duplicates are
    /// kept.
    #[must_use]
    pub fn legend(&self) -> LegendOptions {
        LegendOptions {
            kind: LegendKind::Scroll,
            orient: Orient::Horizontal,
            bottom: Offset::px(0.0),
            item_height: 15,
            item_width: 15,
            text_style: TextStyle::sized(15),
            data: self
                .config
                .legend_lists_entities
                .then(|| self.table.names()),
        }
    }

    /// Save-as-image at 2x pixel ratio.
    #[must_use]
    pub fn toolbox(&self) -> ToolboxOptions {
        ToolboxOptions {
            feature: ToolboxFeature {
                save_as_image: SaveAsImage { pixel_ratio: 2 },
            },
        }
    }

    /// Plot margins; the 20% right margin holds the averages overlay.
    #[must_use]
    pub fn grid(&self) -> GridOptions {
        GridOptions {
            contain_label: true,
            left: Offset::percent(2.0),
            right: Offset::percent(20.0),
        }
    }

    #[must_use]
    pub fn tooltip(&self) -> TooltipOptions {
        TooltipOptions {
            trigger: TooltipTrigger::Axis,
            show: true,
            text_style: TextStyle::sized(12),
            axis_pointer: AxisPointer {
                kind: AxisPointerKind::Cross,
            },
        }
    }

    #[must_use]
    pub fn aria(&self) -> AriaOptions {
        AriaOptions {
            enabled: true,
            decal: Toggle { show: true },
        }
    }
}
