use ratatui::layout::Rect;

/// Adjust a scroll offset so `cursor` stays within a window of `height` rows.
pub(super) fn clamp_scroll(scroll: usize, cursor: usize, height: usize) -> usize {
    if height == 0 {
        return scroll;
    }
    let mut scroll = scroll.min(cursor);
    if cursor >= scroll + height {
        scroll = cursor + 1 - height;
    }
    scroll
}

/// A centered popup rect of at most `width` x `height` cells.
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
