//! Task board controller.
//!
//! [`TaskBoard`] is the single source of truth for the routine screen: the
//! task collection, the selected day and week, and the two animation state
//! machines (completion toggle and week navigation). A renderer only ever
//! reads a [`BoardSnapshot`] and feeds user intents and animation progress
//! back in.
//!
//! # Animation lifecycle
//!
//! ```text
//! request_toggle ──► Animating(id) ──set_toggle_progress──► commit_toggle ──► Idle
//! ```
//!
//! The collection's completion flags are only modified by `commit_toggle`,
//! which the renderer calls from its animation-completion callback.
//!
//! # Week offsets
//!
//! Week offsets are counted from the week containing the board's anchor, the
//! clock's date when the board was built. A task's `(day, week_offset)` thus
//! keeps resolving to its stored date for the whole session. Today's own
//! offset is derived from the clock on demand.

pub mod animator;
pub mod calendar;
pub mod collection;
pub mod error;
pub mod navigator;
pub mod task;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use log::{debug, info};
use serde::Serialize;

pub use animator::{ToggleAnimation, ToggleAnimator, ToggleState};
pub use calendar::{Calendar, WeekDay};
pub use collection::{TaskCollection, TaskPolicy};
pub use error::BoardError;
pub use navigator::{NavigationKind, NavigationState, WeekNavigator};
pub use task::{Task, TaskId, TaskOffset};

use crate::clock::Clock;
use crate::config::Config;
use crate::constants::DEFAULT_SWIPE_THRESHOLD;

/// Result of an intent guarded by a single-flight animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Started,
    /// Another animation of the same kind was in flight; nothing changed
    Ignored,
}

/// Settings the board is built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardSettings {
    pub week_start: Weekday,
    pub policy: TaskPolicy,
    /// Minimum drag distance, in pixels, that changes the week
    pub swipe_threshold: f32,
}

impl BoardSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            week_start: config.calendar.week_start_day(),
            policy: config.policy.task_policy(),
            swipe_threshold: config.animation.swipe_threshold,
        }
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            week_start: Weekday::Sun,
            policy: TaskPolicy::default(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub visible_tasks: Vec<Task>,
    pub selected_day: u8,
    pub week_offset: i32,
    pub week: Vec<WeekDay>,
    pub animating_task_id: Option<TaskId>,
    pub offsets: HashMap<TaskId, TaskOffset>,
    /// Horizontal displacement of the week strip
    pub week_strip_offset: f32,
}

impl BoardSnapshot {
    pub fn offset_for(&self, task_id: TaskId) -> TaskOffset {
        self.offsets.get(&task_id).copied().unwrap_or_default()
    }
}

pub struct TaskBoard {
    collection: TaskCollection,
    calendar: Calendar,
    clock: Arc<dyn Clock>,
    anchor: NaiveDate,
    selected_day: u8,
    week_offset: i32,
    toggle: ToggleAnimator,
    navigator: WeekNavigator,
    swipe_threshold: f32,
}

impl TaskBoard {
    /// New board on the current week with today selected
    pub fn new(settings: BoardSettings, clock: Arc<dyn Clock>) -> Self {
        let calendar = Calendar::new(settings.week_start);
        let anchor = clock.today();
        let selected_day = calendar.today_index(anchor);

        Self {
            collection: TaskCollection::new(settings.policy),
            calendar,
            clock,
            anchor,
            selected_day,
            week_offset: 0,
            toggle: ToggleAnimator::new(),
            navigator: WeekNavigator::new(),
            swipe_threshold: settings.swipe_threshold,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Date every week offset is counted from
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Offset of the week containing today
    pub fn today_week_offset(&self) -> i32 {
        self.calendar.week_offset_of(self.anchor, self.today())
    }

    pub fn selected_day(&self) -> u8 {
        self.selected_day
    }

    pub fn week_offset(&self) -> i32 {
        self.week_offset
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn collection(&self) -> &TaskCollection {
        &self.collection
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.collection.get(id)
    }

    /// Date of the active selection
    pub fn selected_date(&self) -> NaiveDate {
        self.calendar.resolve_date(self.anchor, self.selected_day, self.week_offset)
    }

    /// The seven days of the active week
    pub fn week(&self) -> Vec<WeekDay> {
        self.calendar.compute_week(self.anchor, self.week_offset, self.today())
    }

    /// Visible tasks for the active selection
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.collection.visible(self.selected_day, self.week_offset)
    }

    pub fn is_toggle_animating(&self) -> bool {
        !self.toggle.can_start()
    }

    pub fn is_navigating(&self) -> bool {
        !self.navigator.can_start()
    }

    pub fn animating_task_id(&self) -> Option<TaskId> {
        self.toggle.animating_task_id()
    }

    pub fn offset_for(&self, task_id: TaskId) -> TaskOffset {
        self.toggle.offset_for(task_id)
    }

    // Task collection intents

    /// Add a task to the selected day
    pub fn create_task(&mut self, title: &str) -> Result<Task, BoardError> {
        let today = self.today();
        let date = self.selected_date();
        match self
            .collection
            .create(title, self.selected_day, self.week_offset, date, today)
        {
            Ok(task) => {
                info!("Created task {} '{}' on {}", task.id, task.title, task.date);
                self.replan_toggle();
                Ok(task)
            }
            Err(e) => {
                info!("Rejected task creation: {}", e);
                Err(e)
            }
        }
    }

    pub fn update_title(&mut self, task_id: TaskId, title: &str) -> Result<bool, BoardError> {
        let updated = self.collection.update_title(task_id, title)?;
        if updated {
            info!("Renamed task {}", task_id);
        } else {
            debug!("Ignored blank title for task {}", task_id);
        }
        Ok(updated)
    }

    /// Remove a task for good. Confirmation is the caller's job.
    pub fn delete_task(&mut self, task_id: TaskId) -> Result<Task, BoardError> {
        let task = self.collection.delete(task_id)?;
        self.toggle.forget(task_id);
        self.replan_toggle();
        info!("Deleted task {} '{}'", task.id, task.title);
        Ok(task)
    }

    // Completion toggle intents

    /// Start toggling `task_id`. Policy rejections are returned before any
    /// animation starts; a request while another toggle is in flight is ignored.
    pub fn request_toggle(&mut self, task_id: TaskId) -> Result<Outcome, BoardError> {
        if !self.toggle.can_start() {
            debug!("Ignored toggle of task {} while another toggle is animating", task_id);
            return Ok(Outcome::Ignored);
        }

        let completed = match self.collection.check_toggle(task_id, self.today()) {
            Ok(completed) => completed,
            Err(e) => {
                info!("Rejected toggle of task {}: {}", task_id, e);
                return Err(e);
            }
        };

        let before = self
            .collection
            .visible_order(self.selected_day, self.week_offset, None);
        let after = self
            .collection
            .visible_order(self.selected_day, self.week_offset, Some(task_id));
        self.toggle.start(task_id, completed, &before, &after);

        debug!("Animating toggle of task {} to completed={}", task_id, completed);
        Ok(Outcome::Started)
    }

    /// Rebuild the in-flight toggle's row plan after its day gained or lost a
    /// task. When the toggled task itself is gone, every row settles in place.
    fn replan_toggle(&mut self) {
        let Some(task_id) = self.toggle.animating_task_id() else {
            return;
        };
        let (before, after) = match self.collection.get(task_id) {
            Some(task) => (
                self.collection.visible_order(task.day, task.week_offset, None),
                self.collection.visible_order(task.day, task.week_offset, Some(task_id)),
            ),
            None => (Vec::new(), Vec::new()),
        };
        self.toggle.replan(&before, &after);
        debug!("Replanned toggle of task {} over {} rows", task_id, before.len());
    }

    /// Feed the toggle timeline's linear progress in `[0, 1]`
    pub fn set_toggle_progress(&mut self, progress: f32) {
        self.toggle.set_progress(progress);
    }

    /// Completion callback of the toggle animation: apply the flip and reset
    /// all offsets. Returns the updated task.
    pub fn commit_toggle(&mut self) -> Option<Task> {
        let animation = self.toggle.commit()?;
        match self.collection.set_completed(animation.task_id, animation.completed) {
            Ok(()) => {
                info!(
                    "Committed task {} completed={}",
                    animation.task_id, animation.completed
                );
                self.collection.get(animation.task_id).cloned()
            }
            Err(e) => {
                debug!("Toggle commit skipped: {}", e);
                None
            }
        }
    }

    // Selection and week navigation intents

    pub fn select_day(&mut self, day: u8) -> Result<(), BoardError> {
        if day > 6 {
            return Err(BoardError::InvalidDay(day));
        }
        self.selected_day = day;
        Ok(())
    }

    /// Move the day selection by `delta`, wrapping within the week
    pub fn shift_day(&mut self, delta: i32) {
        self.selected_day = (self.selected_day as i32 + delta).rem_euclid(7) as u8;
    }

    pub fn begin_drag(&mut self) -> Outcome {
        if self.navigator.begin_drag() {
            Outcome::Started
        } else {
            Outcome::Ignored
        }
    }

    pub fn update_drag(&mut self, dx: f32) {
        self.navigator.update_drag(dx);
    }

    /// Release a drag; returns what the settle animation will do
    pub fn release_drag(&mut self, dx: f32) -> Option<NavigationKind> {
        let kind = self.navigator.release_drag(dx, self.swipe_threshold);
        debug!("Released week drag at {:.1}px: {:?}", dx, kind);
        kind
    }

    pub fn previous_week(&mut self) -> Outcome {
        self.start_week_change(-1)
    }

    pub fn next_week(&mut self) -> Outcome {
        self.start_week_change(1)
    }

    fn start_week_change(&mut self, delta: i32) -> Outcome {
        if self.navigator.start(delta) {
            Outcome::Started
        } else {
            debug!("Ignored week change while navigation is in flight");
            Outcome::Ignored
        }
    }

    pub fn set_navigation_progress(&mut self, progress: f32) {
        self.navigator.set_progress(progress);
    }

    /// Completion callback of the week navigation animation. Returns the week
    /// offset now active. The selected day index is preserved.
    pub fn commit_navigation(&mut self) -> Option<i32> {
        match self.navigator.commit()? {
            NavigationKind::ChangeWeek(delta) => {
                self.week_offset += delta;
                info!("Moved to week offset {}", self.week_offset);
            }
            NavigationKind::SpringBack => {}
        }
        Some(self.week_offset)
    }

    /// Jump to the week containing today and select today
    pub fn go_to_today(&mut self) -> Outcome {
        if !self.navigator.can_start() {
            return Outcome::Ignored;
        }
        let today = self.today();
        self.week_offset = self.calendar.week_offset_of(self.anchor, today);
        self.selected_day = self.calendar.today_index(today);
        info!("Jumped to today");
        Outcome::Started
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let visible: Vec<Task> = self.visible_tasks().into_iter().cloned().collect();
        let offsets = visible
            .iter()
            .map(|task| (task.id, self.toggle.offset_for(task.id)))
            .collect();

        BoardSnapshot {
            visible_tasks: visible,
            selected_day: self.selected_day,
            week_offset: self.week_offset,
            week: self.week(),
            animating_task_id: self.toggle.animating_task_id(),
            offsets,
            week_strip_offset: self.navigator.strip_offset(),
        }
    }
}
