use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Session-scoped task identifier, never reused
pub type TaskId = u64;

/// A to-do item pinned to one day of one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Index into the week, 0 = first day
    pub day: u8,
    /// Whole weeks away from the board's anchor week
    pub week_offset: i32,
    /// Concrete date `day` and `week_offset` resolve to against the anchor
    pub date: NaiveDate,
    pub completed: bool,
    pub background_color: String,
    pub accent_color: String,
}

impl Task {
    /// Whether this task belongs to the given day/week pair
    pub fn is_on(&self, day: u8, week_offset: i32) -> bool {
        self.day == day && self.week_offset == week_offset
    }
}

/// Transient visual displacement of one task row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskOffset {
    /// Vertical displacement in pixels
    pub translate_y: f32,
    pub opacity: f32,
}

impl TaskOffset {
    pub const NEUTRAL: TaskOffset = TaskOffset {
        translate_y: 0.0,
        opacity: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for TaskOffset {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
