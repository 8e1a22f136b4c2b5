//! Top-level component that owns the board and routes events to it.
//!
//! Keys and mouse events become [`Action`]s, actions become board intents,
//! and wall-clock [`Timeline`]s feed animation progress back into the board
//! on every tick until its commit step runs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

use crate::board::{BoardError, NavigationKind, Outcome, TaskBoard, TaskId};
use crate::config::{AnimationConfig, Config};
use crate::constants::{
    ERROR_EMPTY_TITLE, SUCCESS_TASK_COMPLETED, SUCCESS_TASK_CREATED, SUCCESS_TASK_DELETED, SUCCESS_TASK_REOPENED,
    SUCCESS_TASK_UPDATED,
};
use crate::logger::Logger;
use crate::ui::animation::Timeline;
use crate::ui::components::{DialogComponent, StatusBar, StatusMessage, TaskListComponent, WeekStripComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_week_range;

pub struct AppComponent {
    // Component composition
    week_strip: WeekStripComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    board: TaskBoard,
    status: Option<StatusMessage>,
    greeting: String,

    // Animation drivers
    animation: AnimationConfig,
    toggle_timeline: Option<Timeline>,
    navigation_timeline: Option<Timeline>,
    follow_task: Option<TaskId>,

    logger: Logger,
    show_week_strip: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(board: TaskBoard, config: &Config, logger: Logger, greeting: String) -> Self {
        let mut app = Self {
            week_strip: WeekStripComponent::new(),
            task_list: TaskListComponent::new(),
            dialog: DialogComponent::new(),
            board,
            status: None,
            greeting,
            animation: config.animation.clone(),
            toggle_timeline: None,
            navigation_timeline: None,
            follow_task: None,
            logger,
            show_week_strip: config.ui.show_week_strip,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Whether a timeline is running and the screen must keep redrawing
    pub fn is_animating(&self) -> bool {
        self.toggle_timeline.is_some() || self.navigation_timeline.is_some()
    }

    /// Push the latest board snapshot into the child components
    fn sync_component_data(&mut self) {
        let snapshot = self.board.snapshot();
        self.week_strip.update_data(&snapshot);
        self.task_list.update_data(&snapshot, self.board.today());

        if let Some(task_id) = self.follow_task.take() {
            self.task_list.follow_task(task_id);
        }
    }

    /// Translate a terminal event into an action
    pub fn handle_event(&mut self, event: EventType) -> Action {
        match event {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    return self.dialog.handle_key_events(key);
                }
                self.status = None;
                match self.handle_global_key(key) {
                    Action::None => self.task_list.handle_key_events(key),
                    action => action,
                }
            }
            EventType::Mouse(mouse) if !self.dialog.is_visible() => self.week_strip.handle_mouse_events(mouse),
            _ => Action::None,
        }
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousDay,
            KeyCode::Right | KeyCode::Char('l') => Action::NextDay,
            KeyCode::Char('[') => Action::PreviousWeek,
            KeyCode::Char(']') => Action::NextWeek,
            KeyCode::Char('t') => Action::GoToToday,
            _ => Action::None,
        }
    }

    /// Apply an action to the board; `now` anchors any animation it starts
    pub fn update(&mut self, action: Action, now: Instant) {
        match action {
            Action::PreviousDay => self.board.shift_day(-1),
            Action::NextDay => self.board.shift_day(1),
            Action::SelectDay(day) => self.select_day(day),
            Action::PreviousWeek => {
                let outcome = self.board.previous_week();
                self.start_navigation(outcome, now);
            }
            Action::NextWeek => {
                let outcome = self.board.next_week();
                self.start_navigation(outcome, now);
            }
            Action::GoToToday => {
                if self.board.go_to_today() == Outcome::Ignored {
                    self.logger.log("Go to today ignored while the week is changing".to_string());
                }
            }
            Action::DragStart => {
                self.board.begin_drag();
            }
            Action::DragMove(dx) => self.board.update_drag(dx),
            Action::DragEnd { dx, day } => {
                match self.board.release_drag(dx) {
                    Some(NavigationKind::ChangeWeek(_)) => {
                        self.navigation_timeline = Some(Timeline::start(now, self.animation.navigation_duration()));
                    }
                    Some(NavigationKind::SpringBack) => {
                        self.navigation_timeline = Some(Timeline::start(now, self.animation.spring_back_duration()));
                    }
                    None => {}
                }
                if let Some(day) = day {
                    self.select_day(day);
                }
            }
            Action::NextTask => self.task_list.select_next(),
            Action::PreviousTask => self.task_list.select_previous(),
            Action::ToggleTask(task_id) => self.toggle_task(task_id, now),
            Action::DeleteTask(task_id) => {
                match self.board.delete_task(task_id) {
                    Ok(_) => self.status = Some(StatusMessage::Info(SUCCESS_TASK_DELETED.to_string())),
                    Err(e) => self.report_error(&e),
                }
                self.dialog.hide();
            }
            Action::CreateTask { title } => match self.board.create_task(&title) {
                Ok(task) => {
                    self.status = Some(StatusMessage::Info(SUCCESS_TASK_CREATED.to_string()));
                    self.follow_task = Some(task.id);
                    self.dialog.hide();
                }
                Err(BoardError::EmptyTitle) => self.report_error(&BoardError::EmptyTitle),
                Err(e) => {
                    self.report_error(&e);
                    self.dialog.hide();
                }
            },
            Action::EditTask { id, title } => match self.board.update_title(id, &title) {
                Ok(true) => {
                    self.status = Some(StatusMessage::Info(SUCCESS_TASK_UPDATED.to_string()));
                    self.dialog.hide();
                }
                Ok(false) => self.status = Some(StatusMessage::Error(ERROR_EMPTY_TITLE.to_string())),
                Err(e) => {
                    self.report_error(&e);
                    self.dialog.hide();
                }
            },
            Action::ShowDialog(dialog_type) => {
                if dialog_type == DialogType::Logs {
                    self.dialog.set_logs(self.logger.get_logs());
                }
                self.dialog.show(dialog_type);
            }
            Action::HideDialog => self.dialog.hide(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }

        self.sync_component_data();
    }

    fn select_day(&mut self, day: u8) {
        if let Err(e) = self.board.select_day(day) {
            self.report_error(&e);
        }
    }

    fn toggle_task(&mut self, task_id: TaskId, now: Instant) {
        match self.board.request_toggle(task_id) {
            Ok(Outcome::Started) => {
                self.toggle_timeline = Some(Timeline::start(now, self.animation.toggle_duration()));
            }
            Ok(Outcome::Ignored) => {
                self.logger.log(format!("Toggle of task {} ignored, another toggle is running", task_id));
            }
            Err(e) => self.report_error(&e),
        }
    }

    fn start_navigation(&mut self, outcome: Outcome, now: Instant) {
        if outcome == Outcome::Started {
            self.navigation_timeline = Some(Timeline::start(now, self.animation.navigation_duration()));
        }
    }

    fn report_error(&mut self, error: &BoardError) {
        self.logger.log(format!("Board rejected intent: {}", error));
        self.status = Some(StatusMessage::Error(error.to_string()));
    }

    /// Advance running animations and commit the ones that finished.
    /// Returns true when anything changed on screen.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(timeline) = self.toggle_timeline {
            self.board.set_toggle_progress(timeline.progress_at(now));
            if timeline.is_finished_at(now) {
                self.toggle_timeline = None;
                if let Some(task) = self.board.commit_toggle() {
                    let message = if task.completed {
                        SUCCESS_TASK_COMPLETED
                    } else {
                        SUCCESS_TASK_REOPENED
                    };
                    self.status = Some(StatusMessage::Info(message.to_string()));
                    self.follow_task = Some(task.id);
                }
            }
            changed = true;
        }

        if let Some(timeline) = self.navigation_timeline {
            self.board.set_navigation_progress(timeline.progress_at(now));
            if timeline.is_finished_at(now) {
                self.navigation_timeline = None;
                self.board.commit_navigation();
            }
            changed = true;
        }

        if changed {
            self.sync_component_data();
        }
        changed
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let week = self.board.week();
        let range = match (week.first(), week.last()) {
            (Some(first), Some(last)) => format_week_range(first.full_date, last.full_date),
            _ => String::new(),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" Hi, {}", self.greeting),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(range, Style::default().fg(Color::Gray)),
        ]);
        f.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_event(EventType::Key(key))
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let main = LayoutManager::main_layout(rect);
        let board = LayoutManager::board_layout(main[0], self.show_week_strip);

        self.render_header(f, board[0]);
        if self.show_week_strip {
            self.week_strip.render(f, board[1]);
        }
        self.task_list.render(f, board[2]);
        StatusBar::render(f, main[1], self.status.as_ref(), self.is_animating());

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
