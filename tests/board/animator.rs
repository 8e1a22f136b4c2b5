use routine::board::animator::{plan_row_deltas, ToggleAnimator};
use routine::board::{TaskOffset, ToggleState};
use routine::constants::{ANIMATING_OPACITY, ROW_HEIGHT};

const A: u64 = 1;
const B: u64 = 2;
const C: u64 = 3;

fn started() -> ToggleAnimator {
    let mut animator = ToggleAnimator::new();
    assert!(animator.start(B, true, &[A, B, C], &[A, C, B]));
    animator
}

#[test]
fn test_row_deltas_for_completed_middle_task() {
    let deltas = plan_row_deltas(&[A, B, C], &[A, C, B]);

    assert_eq!(deltas[&A], 0);
    assert_eq!(deltas[&B], 1);
    assert_eq!(deltas[&C], -1);
    assert_eq!(deltas.values().sum::<i32>(), 0);
}

#[test]
fn test_row_deltas_sum_to_zero_for_longer_lists() {
    let before = [1, 2, 3, 4, 5, 6];
    let after = [2, 3, 4, 5, 6, 1];
    let deltas = plan_row_deltas(&before, &after);

    assert_eq!(deltas[&1], 5);
    assert!(before[1..].iter().all(|id| deltas[id] == -1));
    assert_eq!(deltas.values().sum::<i32>(), 0);
}

#[test]
fn test_start_is_single_flight() {
    let mut animator = started();

    assert!(!animator.can_start());
    assert!(!animator.start(A, true, &[A, C, B], &[C, B, A]));
    assert_eq!(animator.animating_task_id(), Some(B));
}

#[test]
fn test_offsets_follow_eased_progress() {
    let mut animator = started();

    assert!(animator.offset_for(B).translate_y.abs() < f32::EPSILON);

    animator.set_progress(0.5);
    assert!((animator.offset_for(B).translate_y - ROW_HEIGHT / 2.0).abs() < 1e-3);
    assert!((animator.offset_for(C).translate_y + ROW_HEIGHT / 2.0).abs() < 1e-3);

    animator.set_progress(1.0);
    assert_eq!(animator.offset_for(A), TaskOffset::NEUTRAL);
    assert_eq!(animator.offset_for(B).translate_y, ROW_HEIGHT);
    assert_eq!(animator.offset_for(C).translate_y, -ROW_HEIGHT);
    assert_eq!(animator.offset_for(B).opacity, ANIMATING_OPACITY);
    assert_eq!(animator.offset_for(C).opacity, 1.0);
}

#[test]
fn test_commit_returns_pending_flip_and_resets_offsets() {
    let mut animator = started();
    animator.set_progress(1.0);

    let animation = animator.commit().unwrap();
    assert_eq!(animation.task_id, B);
    assert!(animation.completed);

    assert_eq!(*animator.state(), ToggleState::Idle);
    for id in [A, B, C] {
        assert!(animator.offset_for(id).is_neutral());
    }
    assert!(animator.commit().is_none());
}

#[test]
fn test_forget_evicts_offset() {
    let mut animator = started();
    animator.set_progress(1.0);
    assert_eq!(animator.tracked_len(), 3);

    animator.forget(C);
    assert_eq!(animator.tracked_len(), 2);
    assert!(animator.offset_for(C).is_neutral());
}

#[test]
fn test_replan_keeps_progress_and_drops_departed_rows() {
    const D: u64 = 4;
    let mut animator = started();
    animator.set_progress(1.0);

    // C left the day, D arrived
    animator.replan(&[A, B, D], &[A, D, B]);

    assert_eq!(animator.offset_for(B).translate_y, ROW_HEIGHT);
    assert_eq!(animator.offset_for(D).translate_y, -ROW_HEIGHT);
    assert_eq!(animator.offset_for(A).translate_y, 0.0);
    assert!(animator.offset_for(C).is_neutral());
    assert_eq!(animator.tracked_len(), 3);
}

#[test]
fn test_replan_while_idle_does_nothing() {
    let mut animator = ToggleAnimator::new();
    animator.replan(&[A, B], &[B, A]);

    assert_eq!(animator.state(), &ToggleState::Idle);
    assert_eq!(animator.tracked_len(), 0);
}
