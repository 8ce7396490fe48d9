use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

/// Returns the terminal column width of the first `char_count` characters of
/// `line`.
pub fn display_width(line: &str, char_count: usize) -> usize {
    line.chars()
        .take(char_count)
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}

/// Computes a rectangle of `width_percent` x `height_percent` centered in
/// `area`, never smaller than the given minimums unless `area` is.
pub fn centered_rect(
    area: Rect,
    width_percent: u16,
    height_percent: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let popup_width = percent_of(area.width, width_percent).max(min_width);
    let popup_height = percent_of(area.height, height_percent).max(min_height);

    let width = popup_width.min(area.width);
    let height = popup_height.min(area.height);

    let x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    let y = area.y.saturating_add(area.height.saturating_sub(height) / 2);

    Rect::new(x, y, width, height)
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent) / 100;

    u16::try_from(scaled).unwrap_or(u16::MAX)
}

/// First row to draw so that `cursor_row` stays inside `visible_rows`.
pub fn scroll_to_keep_visible(cursor_row: usize, visible_rows: u16) -> u16 {
    let visible_rows = usize::from(visible_rows.max(1));
    let offset = (cursor_row + 1).saturating_sub(visible_rows);

    u16::try_from(offset).unwrap_or(u16::MAX)
}
