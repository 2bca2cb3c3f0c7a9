use iwi_chart::api::options::GraphicKind;
use iwi_chart::api::{BarChartBuilder, BuilderConfig, ChartVariant, OverlayLayout, overlay_text};
use iwi_chart::core::{DataTable, VillageRecord};

fn table(count: usize) -> DataTable {
    (0..count)
        .map(|i| VillageRecord::new(format!("V{i}"), vec![10.0, 20.0, 30.0 + i as f64 * 3.0]))
        .collect()
}

#[test]
fn overlay_lists_one_text_per_entity() {
    let table = table(3);
    let overlay = BarChartBuilder::for_variant(&table, ChartVariant::Stacked).overlay();

    assert_eq!(overlay.kind, GraphicKind::Group);
    assert_eq!(overlay.elements.len(), 3);
    let first = &overlay.elements[0];
    assert_eq!(first.kind, GraphicKind::Text);
    assert_eq!(first.right, 40.0);
    assert_eq!(first.top, 250.0);
    assert_eq!(first.style.text, "V0 Avg. unit: 20.00");
    assert_eq!(first.style.font, "20px Arial");
    assert_eq!(first.style.fill, "#6F9CA3");
    assert_eq!(overlay.elements[1].style.text, "V1 Avg. unit: 21.00");
    assert_eq!(overlay.elements[2].top, 290.0);
}

#[test]
fn overlay_falls_back_to_black_past_palette() {
    let table = table(6);
    let overlay = BarChartBuilder::for_variant(&table, ChartVariant::Stacked).overlay();

    assert_eq!(overlay.elements[4].style.fill, "#4A7A81");
    assert_eq!(overlay.elements[5].style.fill, "#000");
}

#[test]
fn overlay_tops_increase_with_custom_layout() {
    let table = table(4);
    let layout = OverlayLayout {
        right: 12.0,
        base_top: 100.0,
        line_step: 35.0,
    };
    let config = BuilderConfig::default().with_overlay_layout(layout);
    let overlay = BarChartBuilder::new(&table, config).overlay();

    let tops: Vec<f64> = overlay.elements.iter().map(|e| e.top).collect();
    assert_eq!(tops, vec![100.0, 135.0, 170.0, 205.0]);
    assert!(overlay.elements.iter().all(|e| e.right == 12.0));
}

#[test]
fn overlay_shows_nan_for_empty_series() {
    let table = DataTable::new(vec![VillageRecord::new("Blank", Vec::new())]);
    let overlay = BarChartBuilder::for_variant(&table, ChartVariant::Overlapped).overlay();

    assert_eq!(overlay.elements[0].style.text, "Blank Avg. unit: NaN");
}

#[test]
fn overlay_from_precomputed_averages_matches_overlay() {
    let table = table(2);
    let builder = BarChartBuilder::for_variant(&table, ChartVariant::Overlapped);
    let averages = builder.averages();

    assert_eq!(builder.overlay_from(&averages), builder.overlay());
    assert_eq!(
        overlay_text(&averages[1]),
        builder.overlay().elements[1].style.text
    );
}

#[test]
fn overlay_for_empty_table_is_empty_group() {
    let table = DataTable::default();
    let overlay = BarChartBuilder::for_variant(&table, ChartVariant::Stacked).overlay();

    assert_eq!(overlay.kind, GraphicKind::Group);
    assert!(overlay.elements.is_empty());
}
