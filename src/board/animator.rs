//! Completion-toggle animation state machine.
//!
//! A toggle does not touch the collection immediately. The animator computes
//! where every visible row ends up once the toggle is applied, slides all rows
//! toward those slots together, and only on [`ToggleAnimator::commit`] hands
//! the pending flip back so the collection can apply it. At most one toggle is
//! in flight.

use std::collections::HashMap;

use super::task::{TaskId, TaskOffset};
use crate::constants::{ANIMATING_OPACITY, ROW_HEIGHT};

/// A toggle in progress
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleAnimation {
    pub task_id: TaskId,
    /// Completion value the task gets on commit
    pub completed: bool,
    /// Target displacement of each visible task, in rows
    pub row_deltas: HashMap<TaskId, i32>,
    /// Linear timeline progress in `[0, 1]`
    pub progress: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToggleState {
    #[default]
    Idle,
    Animating(ToggleAnimation),
}

#[derive(Debug, Clone, Default)]
pub struct ToggleAnimator {
    state: ToggleState,
    offsets: HashMap<TaskId, TaskOffset>,
}

impl ToggleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    pub fn can_start(&self) -> bool {
        matches!(self.state, ToggleState::Idle)
    }

    pub fn animating_task_id(&self) -> Option<TaskId> {
        match &self.state {
            ToggleState::Animating(animation) => Some(animation.task_id),
            ToggleState::Idle => None,
        }
    }

    /// Begin animating `task_id` from the `before` order to the `after` order.
    ///
    /// Returns `false` and changes nothing if an animation is already in flight.
    pub fn start(&mut self, task_id: TaskId, completed: bool, before: &[TaskId], after: &[TaskId]) -> bool {
        if !self.can_start() {
            return false;
        }

        let row_deltas = plan_row_deltas(before, after);
        self.state = ToggleState::Animating(ToggleAnimation {
            task_id,
            completed,
            row_deltas,
            progress: 0.0,
        });
        self.apply_progress();
        true
    }

    /// Advance the timeline; `progress` is linear time in `[0, 1]`
    pub fn set_progress(&mut self, progress: f32) {
        if let ToggleState::Animating(animation) = &mut self.state {
            animation.progress = progress.clamp(0.0, 1.0);
        }
        self.apply_progress();
    }

    /// Finish the in-flight animation. Every offset is back to neutral when
    /// this returns, and the pending flip is handed to the caller to apply.
    pub fn commit(&mut self) -> Option<ToggleAnimation> {
        match std::mem::take(&mut self.state) {
            ToggleState::Animating(animation) => {
                for offset in self.offsets.values_mut() {
                    *offset = TaskOffset::NEUTRAL;
                }
                Some(animation)
            }
            ToggleState::Idle => None,
        }
    }

    /// Recompute the row deltas of the in-flight animation after the visible
    /// rows changed under it. Progress is kept, so rows jump straight to their
    /// eased position in the new plan. Does nothing when idle.
    pub fn replan(&mut self, before: &[TaskId], after: &[TaskId]) {
        let ToggleState::Animating(animation) = &mut self.state else {
            return;
        };
        animation.row_deltas = plan_row_deltas(before, after);
        let planned = &animation.row_deltas;
        self.offsets.retain(|task_id, _| planned.contains_key(task_id));
        self.apply_progress();
    }

    /// Current offset of a task; neutral when it has none
    pub fn offset_for(&self, task_id: TaskId) -> TaskOffset {
        self.offsets.get(&task_id).copied().unwrap_or_default()
    }

    /// Drop the cached offset of a deleted task
    pub fn forget(&mut self, task_id: TaskId) {
        self.offsets.remove(&task_id);
        if let ToggleState::Animating(animation) = &mut self.state {
            animation.row_deltas.remove(&task_id);
        }
    }

    /// Number of tasks with a cached offset entry
    pub fn tracked_len(&self) -> usize {
        self.offsets.len()
    }

    fn apply_progress(&mut self) {
        let ToggleState::Animating(animation) = &self.state else {
            return;
        };

        let eased = ease_in_out(animation.progress);
        for (task_id, delta) in &animation.row_deltas {
            let opacity = if *task_id == animation.task_id {
                ANIMATING_OPACITY
            } else {
                1.0
            };
            self.offsets.insert(
                *task_id,
                TaskOffset {
                    translate_y: *delta as f32 * ROW_HEIGHT * eased,
                    opacity,
                },
            );
        }
    }
}

/// Row delta (`new_index - old_index`) of every task in `before`.
///
/// Tasks missing from `after` keep a delta of zero.
pub fn plan_row_deltas(before: &[TaskId], after: &[TaskId]) -> HashMap<TaskId, i32> {
    let new_index: HashMap<TaskId, usize> = after.iter().enumerate().map(|(index, id)| (*id, index)).collect();

    before
        .iter()
        .enumerate()
        .map(|(old, id)| {
            let delta = new_index.get(id).map_or(0, |new| *new as i32 - old as i32);
            (*id, delta)
        })
        .collect()
}

/// Cubic ease-in-out. Monotone on `[0, 1]`, no overshoot.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
