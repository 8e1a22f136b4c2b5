//! Modal dialogs: task input, delete confirmation and the log view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::constants::{DIALOG_TITLE_EDIT_TASK, DIALOG_TITLE_LOGS, DIALOG_TITLE_NEW_TASK};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::ui::layout::LayoutManager;

/// Creates a styled main dialog block
fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor
fn create_input_paragraph<'a>(input_buffer: &'a str, field_title: &str) -> Paragraph<'a> {
    let cursor_char = "█";
    let input_display = format!("{}{}", input_buffer, cursor_char);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    logs: Vec<String>,
    log_scroll: usize,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            logs: Vec::new(),
            log_scroll: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.input_buffer = match &dialog_type {
            DialogType::TaskEdit { title, .. } => title.clone(),
            _ => String::new(),
        };
        self.log_scroll = 0;
        self.dialog_type = Some(dialog_type);
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
    }

    pub fn set_logs(&mut self, logs: Vec<String>) {
        self.logs = logs;
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => {
                let title = self.input_buffer.clone();
                match &self.dialog_type {
                    Some(DialogType::TaskCreation) => Action::CreateTask { title },
                    Some(DialogType::TaskEdit { task_id, .. }) => Action::EditTask { id: *task_id, title },
                    _ => Action::None,
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect, title: &str) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
        f.render_widget(Clear, dialog_area);

        let block = create_dialog_block(title, Color::Cyan);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);
        f.render_widget(create_input_paragraph(&self.input_buffer, "Title"), chunks[0]);
    }

    fn render_delete_confirmation(&self, f: &mut Frame, area: Rect, title: &str) {
        let confirm_area = LayoutManager::centered_rect(60, 25, area);
        f.render_widget(Clear, confirm_area);

        let task_preview = if title.chars().count() > 40 {
            format!("{}...", title.chars().take(37).collect::<String>())
        } else {
            title.to_string()
        };

        let confirm_text = format!(
            "Delete task?\n\n\"{task_preview}\"\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel",
        );

        let confirm_paragraph = Paragraph::new(confirm_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("⚠️  Confirm Delete")
                    .title_alignment(Alignment::Center),
            )
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(confirm_paragraph, confirm_area);
    }

    fn render_logs(&self, f: &mut Frame, area: Rect) {
        let logs_area = LayoutManager::centered_rect(80, 70, area);
        f.render_widget(Clear, logs_area);

        let items: Vec<ListItem> = self
            .logs
            .iter()
            .skip(self.log_scroll)
            .map(|entry| ListItem::new(Line::from(Span::raw(entry.clone()))))
            .collect();

        let list = List::new(items).block(create_dialog_block(DIALOG_TITLE_LOGS, Color::Gray));
        f.render_widget(list, logs_area);
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::TaskCreation) | Some(DialogType::TaskEdit { .. }) => self.handle_input_key(key),
            Some(DialogType::DeleteConfirmation { task_id, .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Action::DeleteTask(*task_id),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.log_scroll + 1 < self.logs.len() {
                        self.log_scroll += 1;
                    }
                    Action::None
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.log_scroll = self.log_scroll.saturating_sub(1);
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::TaskCreation) => self.render_input(f, rect, DIALOG_TITLE_NEW_TASK),
            Some(DialogType::TaskEdit { .. }) => self.render_input(f, rect, DIALOG_TITLE_EDIT_TASK),
            Some(DialogType::DeleteConfirmation { title, .. }) => self.render_delete_confirmation(f, rect, title),
            Some(DialogType::Logs) => self.render_logs(f, rect),
            None => {}
        }
    }
}
