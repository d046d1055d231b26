pub mod color_picker;
pub mod dialog;
pub mod editor;
pub mod file_picker;
pub mod header;
pub mod menu_bar;
pub mod status;

use ratatui::layout::Rect;

/// A `width` x `height` rect centered in `area`, clamped to fit inside it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(area, 40, 10), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(2, 3, 10, 5);
        assert_eq!(centered_rect(area, 40, 10), area);
    }
}
