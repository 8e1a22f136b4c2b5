//! Day selector showing the seven days of the active week

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::board::{BoardSnapshot, WeekDay};
use crate::constants::PIXELS_PER_COLUMN;
use crate::ui::core::{actions::Action, Component};

const CELL_WIDTH: usize = 7;

pub struct WeekStripComponent {
    week: Vec<WeekDay>,
    selected_day: u8,
    strip_offset: f32,
    drag_origin: Option<u16>,
    area: Rect,
}

impl WeekStripComponent {
    pub fn new() -> Self {
        Self {
            week: Vec::new(),
            selected_day: 0,
            strip_offset: 0.0,
            drag_origin: None,
            area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, snapshot: &BoardSnapshot) {
        self.week = snapshot.week.clone();
        self.selected_day = snapshot.selected_day;
        self.strip_offset = snapshot.week_strip_offset;
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }

    /// Day index under a terminal column
    fn day_at(&self, column: u16) -> Option<u8> {
        let inner_x = self.area.x + 1;
        let relative = column.checked_sub(inner_x)? as usize;
        let day = relative / CELL_WIDTH;
        (day < 7).then_some(day as u8)
    }

    fn cell_style(&self, day: &WeekDay) -> Style {
        let mut style = Style::default().fg(Color::Gray);
        if day.is_today {
            style = style.fg(Color::Rgb(255, 149, 0)).add_modifier(Modifier::BOLD);
        }
        if day.index == self.selected_day {
            style = style.bg(Color::White).fg(Color::Black).add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl Default for WeekStripComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for WeekStripComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.contains(mouse.column, mouse.row) => {
                self.drag_origin = Some(mouse.column);
                Action::DragStart
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.drag_origin {
                Some(origin) => Action::DragMove((mouse.column as f32 - origin as f32) * PIXELS_PER_COLUMN),
                None => Action::None,
            },
            MouseEventKind::Up(MouseButton::Left) => match self.drag_origin.take() {
                Some(origin) => {
                    let dx = (mouse.column as f32 - origin as f32) * PIXELS_PER_COLUMN;
                    let day = if mouse.column == origin {
                        self.day_at(mouse.column)
                    } else {
                        None
                    };
                    Action::DragEnd { dx, day }
                }
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let mut labels = Vec::new();
        let mut numbers = Vec::new();
        for day in &self.week {
            let style = self.cell_style(day);
            let marker = if day.is_today { "•" } else { " " };
            labels.push(Span::styled(format!("{:^width$}", day.day_label, width = CELL_WIDTH), style));
            numbers.push(Span::styled(
                format!("{:^width$}", format!("{}{}", day.day_of_month, marker), width = CELL_WIDTH),
                style,
            ));
        }

        // Shift the strip while it is being dragged or animated
        let shift = (self.strip_offset / PIXELS_PER_COLUMN).round() as i32;
        let (pad, scroll) = if shift > 0 {
            (" ".repeat(shift as usize), 0)
        } else {
            (String::new(), shift.unsigned_abs().min(u16::MAX as u32) as u16)
        };
        if !pad.is_empty() {
            labels.insert(0, Span::raw(pad.clone()));
            numbers.insert(0, Span::raw(pad));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));

        let strip = Paragraph::new(vec![Line::from(labels), Line::from(numbers)])
            .block(block)
            .scroll((0, scroll));
        f.render_widget(strip, rect);
    }
}
