use iwi_chart::core::{FALLBACK_TEXT_COLOR, PALETTE, palette_color};

#[test]
fn palette_lookup_returns_fixed_colors_in_order() {
    let expected = ["#6F9CA3", "#FEC876", "#89B99B", "#7B72FF", "#4A7A81"];
    for (index, color) in expected.iter().enumerate() {
        assert_eq!(palette_color(index), Some(*color));
    }
    assert_eq!(PALETTE, expected);
}

#[test]
fn palette_lookup_does_not_wrap() {
    assert_eq!(palette_color(5), None);
    assert_eq!(palette_color(6), None);
    assert_eq!(palette_color(usize::MAX), None);
}

#[test]
fn fallback_text_color_is_black() {
    assert_eq!(FALLBACK_TEXT_COLOR, "#000");
}
