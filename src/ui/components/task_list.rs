//! Task list for the selected day.
//!
//! Rows are drawn at their slot plus the animated displacement from the board
//! snapshot, so a toggled task visibly slides to its new position while the
//! rows it passes shift by one slot the other way. The list scrolls so the
//! cursor row is always drawn.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use std::collections::HashMap;

use crate::board::{BoardSnapshot, Task, TaskId, TaskOffset};
use crate::constants::{EMPTY_DAY_MESSAGE, ROW_HEIGHT, ROW_LINES};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::color::{fade, hex_to_color};
use crate::utils::datetime::format_human_date;

pub struct TaskListComponent {
    tasks: Vec<Task>,
    offsets: HashMap<TaskId, TaskOffset>,
    animating_task_id: Option<TaskId>,
    selected_index: usize,
    /// First slot drawn at the top of the list
    scroll_offset: usize,
    scrollbar: ScrollbarState,
    date: Option<NaiveDate>,
    today: Option<NaiveDate>,
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            offsets: HashMap::new(),
            animating_task_id: None,
            selected_index: 0,
            scroll_offset: 0,
            scrollbar: ScrollbarState::new(0),
            date: None,
            today: None,
        }
    }

    pub fn update_data(&mut self, snapshot: &BoardSnapshot, today: NaiveDate) {
        self.tasks = snapshot.visible_tasks.clone();
        self.offsets = snapshot.offsets.clone();
        self.animating_task_id = snapshot.animating_task_id;
        self.date = snapshot
            .week
            .iter()
            .find(|day| day.index == snapshot.selected_day)
            .map(|day| day.full_date);
        self.today = Some(today);

        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.tasks.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.tasks.is_empty() {
            self.selected_index = (self.selected_index + self.tasks.len() - 1) % self.tasks.len();
        }
    }

    /// Keep the cursor on `task_id` after the list was re-sorted
    pub fn follow_task(&mut self, task_id: TaskId) {
        if let Some(index) = self.tasks.iter().position(|task| task.id == task_id) {
            self.selected_index = index;
        }
    }

    /// Scroll just enough that the cursor row lies within `visible_rows` slots
    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.selected_index + 1 - visible_rows;
        }
        self.scroll_offset = self
            .scroll_offset
            .min(self.tasks.len().saturating_sub(visible_rows));
    }

    fn title(&self) -> String {
        match (self.date, self.today) {
            (Some(date), Some(today)) => format!(" Tasks · {} ", format_human_date(date, today)),
            _ => " Tasks ".to_string(),
        }
    }

    fn render_row(&self, f: &mut Frame, area: Rect, index: usize, task: &Task) {
        let offset = self.offsets.get(&task.id).copied().unwrap_or_default();
        let top = LayoutManager::row_top(index, self.scroll_offset, offset.translate_y, ROW_HEIGHT, ROW_LINES);

        // Clip the row to the list area
        let start = top.max(0);
        let end = (top + ROW_LINES as i32).min(area.height as i32);
        if end <= start {
            return;
        }
        let row_area = Rect::new(area.x, area.y + start as u16, area.width, (end - start) as u16);

        let selected = index == self.selected_index;
        let accent = fade(hex_to_color(&task.accent_color), offset.opacity);
        let border_color = if selected { Color::Yellow } else { accent };

        let (checkbox, title_style) = if task.completed {
            (
                "☑",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            )
        } else {
            ("☐", Style::default().fg(fade(Color::Rgb(255, 255, 255), offset.opacity)))
        };
        let title_style = if selected {
            title_style.add_modifier(Modifier::BOLD)
        } else {
            title_style
        };

        let line = Line::from(vec![
            Span::styled(format!("{} ", checkbox), Style::default().fg(accent)),
            Span::styled(task.title.clone(), title_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        f.render_widget(Paragraph::new(line).block(block), row_area);
    }
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextTask,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousTask,
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Char(' ') | KeyCode::Enter => match self.selected_task() {
                Some(task) => Action::ToggleTask(task.id),
                None => Action::None,
            },
            KeyCode::Char('e') => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::TaskEdit {
                    task_id: task.id,
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('d') | KeyCode::Delete => match self.selected_task() {
                Some(task) => Action::ShowDialog(DialogType::DeleteConfirmation {
                    task_id: task.id,
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title())
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.tasks.is_empty() {
            self.scroll_offset = 0;
            let empty = Paragraph::new(EMPTY_DAY_MESSAGE)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, inner);
            return;
        }

        let visible_rows = (inner.height / ROW_LINES) as usize;
        self.scroll_to_selection(visible_rows);

        // The sliding task is drawn first so the rows it passes cover it
        if let Some((index, task)) = self
            .tasks
            .iter()
            .enumerate()
            .find(|(_, task)| Some(task.id) == self.animating_task_id)
        {
            self.render_row(f, inner, index, task);
        }
        for (index, task) in self.tasks.iter().enumerate() {
            if Some(task.id) != self.animating_task_id {
                self.render_row(f, inner, index, task);
            }
        }

        if self.tasks.len() > visible_rows {
            let scrollbar_area = Rect::new(
                rect.x + rect.width.saturating_sub(1),
                rect.y + 1,
                1,
                rect.height.saturating_sub(2),
            );
            self.scrollbar = self
                .scrollbar
                .content_length(self.tasks.len())
                .viewport_content_length(visible_rows)
                .position(self.selected_index);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray));
            f.render_stateful_widget(scrollbar, scrollbar_area, &mut self.scrollbar);
        }
    }
}
