/// Fixed series palette, indexed by entity position.
pub const PALETTE: [&str; 5] = ["#6F9CA3", "#FEC876", "#89B99B", "#7B72FF", "#4A7A81"];

/// Text color used by the overlay when an entity has no palette entry.
pub const FALLBACK_TEXT_COLOR: &str = "#000";

/// Returns the palette color for `index`, or `None` past the end.
///
/// The palette does not wrap around.
#[must_use]
pub fn palette_color(index: usize) -> Option<&'static str> {
    PALETTE.get(index).copied()
}
