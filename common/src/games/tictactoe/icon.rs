use super::types::Mark;

/// Material icon name used to draw a mark. Empty cells have no icon.
pub fn board_mark_icon(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "close",
        Mark::O => "trip_origin",
        Mark::Empty => "",
    }
}
