//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the header line (profile greeting and week range)
pub const HEADER_HEIGHT: u16 = 1;
/// Height of the day selector strip
pub const WEEK_STRIP_HEIGHT: u16 = 4;

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate the main layout areas (board on top, status bar below)
    #[must_use]
    pub fn main_layout(area: Rect) -> Vec<Rect> {
        let top_height = area.height.saturating_sub(1);
        let top_area = Rect::new(area.x, area.y, area.width, top_height);
        let status_area = Rect::new(area.x, area.y + top_height, area.width, area.height.min(1));

        vec![top_area, status_area]
    }

    /// Split the board area into header, week strip and task list
    #[must_use]
    pub fn board_layout(area: Rect, show_week_strip: bool) -> Vec<Rect> {
        let strip_height = if show_week_strip { WEEK_STRIP_HEIGHT } else { 0 };
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(strip_height),
                Constraint::Min(0),
            ])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Top line of a task row, given its slot index, the first slot scrolled
    /// into view and the animated displacement.
    ///
    /// A displacement of one `ROW_HEIGHT` moves the row by exactly one slot.
    #[must_use]
    pub fn row_top(index: usize, scroll: usize, translate_y: f32, row_height_px: f32, row_lines: u16) -> i32 {
        let base = (index as i32 - scroll as i32) * row_lines as i32;
        let shift = (translate_y / row_height_px * row_lines as f32).round() as i32;
        base + shift
    }
}
