//! The flat, session-scoped task collection.
//!
//! Tasks are kept in insertion order. Every derived view (the visible list for
//! a day, the hypothetical list after a toggle) is computed from that order, so
//! tasks with the same completion status always keep their relative order.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::BoardError;
use super::task::{Task, TaskId};
use crate::constants::TASK_PALETTE;

/// Date rules applied when creating and completing tasks. Each rule is
/// independent of the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPolicy {
    /// Reject creating tasks dated strictly before today
    pub forbid_past_creation: bool,
    /// Reject marking tasks dated strictly after today as completed
    pub forbid_future_completion: bool,
}

impl TaskPolicy {
    /// No date rules at all
    pub const PERMISSIVE: TaskPolicy = TaskPolicy {
        forbid_past_creation: false,
        forbid_future_completion: false,
    };
}

impl Default for TaskPolicy {
    fn default() -> Self {
        Self {
            forbid_past_creation: true,
            forbid_future_completion: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskCollection {
    tasks: Vec<Task>,
    next_id: TaskId,
    policy: TaskPolicy,
}

impl TaskCollection {
    pub fn new(policy: TaskPolicy) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            policy,
        }
    }

    pub fn policy(&self) -> TaskPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: TaskPolicy) {
        self.policy = policy;
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, BoardError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    /// Create a task for `(day, week_offset)` dated `date`.
    ///
    /// `date` must be the date that `(day, week_offset)` resolves to; the
    /// board guarantees this by resolving it through the calendar.
    pub fn create(
        &mut self,
        title: &str,
        day: u8,
        week_offset: i32,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Task, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        if day > 6 {
            return Err(BoardError::InvalidDay(day));
        }
        if self.policy.forbid_past_creation && date < today {
            return Err(BoardError::PastDate { date });
        }

        let (background_color, accent_color) = random_palette_entry();
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            day,
            week_offset,
            date,
            completed: false,
            background_color: background_color.to_string(),
            accent_color: accent_color.to_string(),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());

        Ok(task)
    }

    /// Check whether `id` may be toggled and return its completion value after the flip
    pub fn check_toggle(&self, id: TaskId, today: NaiveDate) -> Result<bool, BoardError> {
        let task = self.get(id).ok_or(BoardError::TaskNotFound(id))?;
        let completed = !task.completed;
        if completed && self.policy.forbid_future_completion && task.date > today {
            return Err(BoardError::FutureCompletion { date: task.date });
        }
        Ok(completed)
    }

    /// Set the completion flag without policy checks. The board commits a
    /// toggle through here once `check_toggle` accepted it.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<(), BoardError> {
        self.get_mut(id)?.completed = completed;
        Ok(())
    }

    /// Replace the title of `id`. A blank title is ignored and `Ok(false)` returned.
    pub fn update_title(&mut self, id: TaskId, title: &str) -> Result<bool, BoardError> {
        let task = self.get_mut(id)?;
        let title = title.trim();
        if title.is_empty() {
            return Ok(false);
        }
        task.title = title.to_string();
        Ok(true)
    }

    pub fn delete(&mut self, id: TaskId) -> Result<Task, BoardError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(BoardError::TaskNotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Visible tasks for a day: incomplete first, then completed, insertion
    /// order within each group
    pub fn visible(&self, day: u8, week_offset: i32) -> Vec<&Task> {
        let mut visible: Vec<&Task> = self.tasks.iter().filter(|task| task.is_on(day, week_offset)).collect();
        // sort_by_key is stable
        visible.sort_by_key(|task| task.completed);
        visible
    }

    /// Ids in visible order, optionally as if `flipped` had its completion toggled
    pub fn visible_order(&self, day: u8, week_offset: i32, flipped: Option<TaskId>) -> Vec<TaskId> {
        let mut entries: Vec<(TaskId, bool)> = self
            .tasks
            .iter()
            .filter(|task| task.is_on(day, week_offset))
            .map(|task| {
                let completed = if Some(task.id) == flipped {
                    !task.completed
                } else {
                    task.completed
                };
                (task.id, completed)
            })
            .collect();
        entries.sort_by_key(|(_, completed)| *completed);
        entries.into_iter().map(|(id, _)| id).collect()
    }
}

impl Default for TaskCollection {
    fn default() -> Self {
        Self::new(TaskPolicy::default())
    }
}

fn random_palette_entry() -> (&'static str, &'static str) {
    let index = rand::rng().random_range(0..TASK_PALETTE.len());
    TASK_PALETTE[index]
}
