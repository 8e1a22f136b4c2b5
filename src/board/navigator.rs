//! Week navigation state machine.
//!
//! Swipes and the previous/next buttons move the week strip through a short
//! animation; the new week offset only takes effect when that animation
//! commits. Like the toggle animator, only one navigation may be in flight.

use super::animator::ease_in_out;
use crate::constants::WEEK_SLIDE_DISTANCE;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationKind {
    /// Move by this many weeks (negative = earlier)
    ChangeWeek(i32),
    /// Return the strip to rest without changing week
    SpringBack,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationAnimation {
    pub kind: NavigationKind,
    /// Horizontal strip offset when the animation started
    pub from: f32,
    pub progress: f32,
}

impl NavigationAnimation {
    fn target(&self) -> f32 {
        match self.kind {
            // The strip slides opposite to the direction of travel
            NavigationKind::ChangeWeek(delta) => -(delta.signum() as f32) * WEEK_SLIDE_DISTANCE,
            NavigationKind::SpringBack => 0.0,
        }
    }

    fn offset(&self) -> f32 {
        self.from + (self.target() - self.from) * ease_in_out(self.progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NavigationState {
    #[default]
    Idle,
    Dragging {
        dx: f32,
    },
    Animating(NavigationAnimation),
}

#[derive(Debug, Clone, Default)]
pub struct WeekNavigator {
    state: NavigationState,
}

impl WeekNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn can_start(&self) -> bool {
        matches!(self.state, NavigationState::Idle)
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, NavigationState::Animating(_))
    }

    /// Start following a horizontal drag
    pub fn begin_drag(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        self.state = NavigationState::Dragging { dx: 0.0 };
        true
    }

    pub fn update_drag(&mut self, dx: f32) {
        if let NavigationState::Dragging { dx: current } = &mut self.state {
            *current = dx;
        }
    }

    /// Let go of the drag. Past `threshold` the week changes in the drag's
    /// direction (dragging right shows the previous week); otherwise the strip
    /// springs back.
    pub fn release_drag(&mut self, dx: f32, threshold: f32) -> Option<NavigationKind> {
        if !matches!(self.state, NavigationState::Dragging { .. }) {
            return None;
        }

        let kind = if dx.abs() >= threshold {
            NavigationKind::ChangeWeek(if dx > 0.0 { -1 } else { 1 })
        } else {
            NavigationKind::SpringBack
        };
        self.state = NavigationState::Animating(NavigationAnimation {
            kind,
            from: dx,
            progress: 0.0,
        });
        Some(kind)
    }

    /// Start a week change from rest (button navigation)
    pub fn start(&mut self, delta: i32) -> bool {
        if !self.can_start() || delta == 0 {
            return false;
        }
        self.state = NavigationState::Animating(NavigationAnimation {
            kind: NavigationKind::ChangeWeek(delta),
            from: 0.0,
            progress: 0.0,
        });
        true
    }

    pub fn set_progress(&mut self, progress: f32) {
        if let NavigationState::Animating(animation) = &mut self.state {
            animation.progress = progress.clamp(0.0, 1.0);
        }
    }

    /// Settle the in-flight animation and return what it did
    pub fn commit(&mut self) -> Option<NavigationKind> {
        match self.state {
            NavigationState::Animating(animation) => {
                self.state = NavigationState::Idle;
                Some(animation.kind)
            }
            _ => None,
        }
    }

    /// Horizontal offset of the week strip right now
    pub fn strip_offset(&self) -> f32 {
        match self.state {
            NavigationState::Idle => 0.0,
            NavigationState::Dragging { dx } => dx,
            NavigationState::Animating(animation) => animation.offset(),
        }
    }
}
