use routine::board::{BoardError, BoardSettings, NavigationKind, Outcome, TaskBoard, TaskPolicy};
use routine::constants::ROW_HEIGHT;
use std::sync::Arc;

use super::{board, board_with_policy, date, wednesday, SteppingClock};

fn visible_titles(board: &routine::board::TaskBoard) -> Vec<String> {
    board.visible_tasks().iter().map(|task| task.title.clone()).collect()
}

#[test]
fn test_new_board_selects_today() {
    let board = board();
    assert_eq!(board.selected_day(), 3);
    assert_eq!(board.week_offset(), 0);
    assert_eq!(board.selected_date(), wednesday());
    assert!(!board.is_toggle_animating());
    assert!(!board.is_navigating());
}

#[test]
fn test_create_task_on_selected_day() {
    let mut board = board();
    board.select_day(5).unwrap();

    let task = board.create_task("Call mom").unwrap();
    assert_eq!(task.day, 5);
    assert_eq!(task.week_offset, 0);
    assert_eq!(task.date, date(2026, 10, 23));
    assert_eq!(visible_titles(&board), vec!["Call mom"]);
}

#[test]
fn test_create_task_in_the_past_is_rejected() {
    let mut board = board();
    board.select_day(2).unwrap();

    assert_eq!(
        board.create_task("Too late"),
        Err(BoardError::PastDate {
            date: date(2026, 10, 20)
        })
    );
    assert!(board.collection().is_empty());

    let mut permissive = board_with_policy(TaskPolicy::PERMISSIVE);
    permissive.select_day(2).unwrap();
    assert!(permissive.create_task("Catch up").is_ok());
}

#[test]
fn test_toggle_animates_before_committing() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();
    let c = board.create_task("C").unwrap();

    assert_eq!(board.request_toggle(b.id), Ok(Outcome::Started));
    assert_eq!(board.animating_task_id(), Some(b.id));

    // Nothing is applied until the commit
    assert!(!board.task(b.id).unwrap().completed);
    assert_eq!(visible_titles(&board), vec!["A", "B", "C"]);

    board.set_toggle_progress(1.0);
    let snapshot = board.snapshot();
    assert_eq!(snapshot.offset_for(a.id).translate_y, 0.0);
    assert_eq!(snapshot.offset_for(b.id).translate_y, ROW_HEIGHT);
    assert_eq!(snapshot.offset_for(c.id).translate_y, -ROW_HEIGHT);
    let total: f32 = snapshot.offsets.values().map(|offset| offset.translate_y).sum();
    assert!(total.abs() < 1e-3);

    let committed = board.commit_toggle().unwrap();
    assert_eq!(committed.id, b.id);
    assert!(committed.completed);
    assert_eq!(visible_titles(&board), vec!["A", "C", "B"]);

    let snapshot = board.snapshot();
    assert!(snapshot.offsets.values().all(|offset| offset.is_neutral()));
    assert_eq!(snapshot.animating_task_id, None);
}

#[test]
fn test_toggle_of_the_only_task_still_animates() {
    let mut board = board();
    let only = board.create_task("Only").unwrap();

    assert_eq!(board.request_toggle(only.id), Ok(Outcome::Started));
    board.set_toggle_progress(0.5);
    assert_eq!(board.offset_for(only.id).translate_y, 0.0);
    board.set_toggle_progress(1.0);
    assert_eq!(board.offset_for(only.id).translate_y, 0.0);

    let committed = board.commit_toggle().unwrap();
    assert!(committed.completed);
    assert!(!board.is_toggle_animating());
    assert_eq!(visible_titles(&board), vec!["Only"]);
}

#[test]
fn test_toggle_of_a_task_already_in_its_slot() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();

    // B is the last incomplete task and nothing completed follows it
    assert_eq!(board.request_toggle(b.id), Ok(Outcome::Started));
    board.set_toggle_progress(1.0);
    let snapshot = board.snapshot();
    assert_eq!(snapshot.animating_task_id, Some(b.id));
    assert!(snapshot.offsets.values().all(|offset| offset.translate_y == 0.0));

    let committed = board.commit_toggle().unwrap();
    assert_eq!(committed.id, b.id);
    assert!(committed.completed);
    assert!(!board.task(a.id).unwrap().completed);
    assert_eq!(visible_titles(&board), vec!["A", "B"]);
}

#[test]
fn test_second_toggle_is_ignored_while_animating() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();

    assert_eq!(board.request_toggle(a.id), Ok(Outcome::Started));
    assert_eq!(board.request_toggle(b.id), Ok(Outcome::Ignored));
    assert_eq!(board.animating_task_id(), Some(a.id));

    board.set_toggle_progress(1.0);
    board.commit_toggle();
    assert!(board.task(a.id).unwrap().completed);
    assert!(!board.task(b.id).unwrap().completed);
    assert_eq!(board.request_toggle(b.id), Ok(Outcome::Started));
}

#[test]
fn test_reopening_moves_task_back() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    board.create_task("B").unwrap();

    board.request_toggle(a.id).unwrap();
    board.commit_toggle();
    assert_eq!(visible_titles(&board), vec!["B", "A"]);

    board.request_toggle(a.id).unwrap();
    board.set_toggle_progress(1.0);
    assert_eq!(board.offset_for(a.id).translate_y, -ROW_HEIGHT);
    let reopened = board.commit_toggle().unwrap();
    assert!(!reopened.completed);
    assert_eq!(visible_titles(&board), vec!["A", "B"]);
}

#[test]
fn test_future_completion_is_rejected_before_animating() {
    let mut board = board();
    board.select_day(6).unwrap();
    let task = board.create_task("Saturday run").unwrap();

    assert_eq!(
        board.request_toggle(task.id),
        Err(BoardError::FutureCompletion {
            date: date(2026, 10, 24)
        })
    );
    assert!(!board.is_toggle_animating());
    assert!(!board.task(task.id).unwrap().completed);
}

#[test]
fn test_delete_during_toggle_is_tolerated() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();

    board.request_toggle(a.id).unwrap();
    board.set_toggle_progress(0.5);
    board.delete_task(a.id).unwrap();

    assert!(board.commit_toggle().is_none());
    assert!(!board.is_toggle_animating());
    assert!(board.offset_for(b.id).is_neutral());
    assert_eq!(visible_titles(&board), vec!["B"]);
}

#[test]
fn test_create_during_toggle_replans_rows() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();
    let c = board.create_task("C").unwrap();

    board.request_toggle(a.id).unwrap();
    board.set_toggle_progress(1.0);
    assert_eq!(board.offset_for(a.id).translate_y, 2.0 * ROW_HEIGHT);

    let d = board.create_task("D").unwrap();
    let snapshot = board.snapshot();
    assert_eq!(snapshot.offset_for(a.id).translate_y, 3.0 * ROW_HEIGHT);
    assert_eq!(snapshot.offset_for(b.id).translate_y, -ROW_HEIGHT);
    assert_eq!(snapshot.offset_for(c.id).translate_y, -ROW_HEIGHT);
    assert_eq!(snapshot.offset_for(d.id).translate_y, -ROW_HEIGHT);
    let total: f32 = snapshot.offsets.values().map(|offset| offset.translate_y).sum();
    assert!(total.abs() < 1e-3);

    board.commit_toggle().unwrap();
    assert_eq!(visible_titles(&board), vec!["B", "C", "D", "A"]);
}

#[test]
fn test_delete_of_another_row_during_toggle_replans_rows() {
    let mut board = board();
    let a = board.create_task("A").unwrap();
    let b = board.create_task("B").unwrap();
    let c = board.create_task("C").unwrap();

    board.request_toggle(a.id).unwrap();
    board.set_toggle_progress(1.0);
    board.delete_task(b.id).unwrap();

    assert_eq!(board.offset_for(a.id).translate_y, ROW_HEIGHT);
    assert_eq!(board.offset_for(c.id).translate_y, -ROW_HEIGHT);
    assert!(board.offset_for(b.id).is_neutral());

    board.commit_toggle().unwrap();
    assert_eq!(visible_titles(&board), vec!["C", "A"]);
}

#[test]
fn test_tasks_keep_their_slot_when_today_crosses_a_week_boundary() {
    let clock = Arc::new(SteppingClock::new(date(2026, 10, 24)));
    let mut board = TaskBoard::new(BoardSettings::default(), clock.clone());
    assert_eq!(board.selected_day(), 6);
    let chore = board.create_task("Saturday chore").unwrap();
    assert_eq!(chore.date, date(2026, 10, 24));

    // Midnight: Sunday opens a new week
    clock.set(date(2026, 10, 25));

    let snapshot = board.snapshot();
    assert_eq!(snapshot.week[6].full_date, chore.date);
    assert_eq!(board.selected_date(), chore.date);
    assert_eq!(visible_titles(&board), vec!["Saturday chore"]);
    assert!(snapshot.week.iter().all(|day| !day.is_today));

    assert_eq!(board.today_week_offset(), 1);
    assert_eq!(board.go_to_today(), Outcome::Started);
    assert_eq!(board.week_offset(), 1);
    assert_eq!(board.selected_day(), 0);
    assert_eq!(board.selected_date(), date(2026, 10, 25));
    assert!(board.snapshot().week[0].is_today);

    board.select_day(6).unwrap();
    assert_eq!(board.selected_date(), date(2026, 10, 31));
    assert!(board.visible_tasks().is_empty());

    for task in board.collection().tasks() {
        assert_eq!(
            board.calendar().resolve_date(board.anchor(), task.day, task.week_offset),
            task.date
        );
    }
}

#[test]
fn test_update_and_delete() {
    let mut board = board();
    let task = board.create_task("Draft").unwrap();

    assert_eq!(board.update_title(task.id, "Final"), Ok(true));
    assert_eq!(board.update_title(task.id, ""), Ok(false));
    assert_eq!(board.task(task.id).unwrap().title, "Final");

    board.delete_task(task.id).unwrap();
    assert!(board.task(task.id).is_none());
    assert_eq!(board.delete_task(task.id), Err(BoardError::TaskNotFound(task.id)));
}

#[test]
fn test_day_selection() {
    let mut board = board();

    assert_eq!(board.select_day(7), Err(BoardError::InvalidDay(7)));
    assert_eq!(board.selected_day(), 3);

    board.select_day(0).unwrap();
    board.shift_day(-1);
    assert_eq!(board.selected_day(), 6);
    board.shift_day(1);
    assert_eq!(board.selected_day(), 0);
}

#[test]
fn test_week_change_commits_after_animation() {
    let mut board = board();
    board.select_day(5).unwrap();

    assert_eq!(board.next_week(), Outcome::Started);
    assert_eq!(board.previous_week(), Outcome::Ignored);
    assert_eq!(board.week_offset(), 0);

    board.set_navigation_progress(1.0);
    assert_eq!(board.commit_navigation(), Some(1));
    assert_eq!(board.week_offset(), 1);
    assert_eq!(board.selected_day(), 5);
    assert_eq!(board.selected_date(), date(2026, 10, 30));
    assert_eq!(board.snapshot().week_strip_offset, 0.0);
}

#[test]
fn test_tasks_stay_in_their_week() {
    let mut board = board();
    board.create_task("This week").unwrap();

    board.next_week();
    board.commit_navigation();
    assert!(board.visible_tasks().is_empty());
    board.create_task("Next week").unwrap();
    assert_eq!(visible_titles(&board), vec!["Next week"]);

    board.previous_week();
    board.commit_navigation();
    assert_eq!(visible_titles(&board), vec!["This week"]);
}

#[test]
fn test_drag_release_below_threshold_keeps_week() {
    let mut board = board();

    assert_eq!(board.begin_drag(), Outcome::Started);
    board.update_drag(30.0);
    assert_eq!(board.snapshot().week_strip_offset, 30.0);

    assert_eq!(board.release_drag(30.0), Some(NavigationKind::SpringBack));
    board.set_navigation_progress(1.0);
    assert_eq!(board.commit_navigation(), Some(0));
    assert_eq!(board.week_offset(), 0);
}

#[test]
fn test_drag_right_goes_to_previous_week() {
    let mut board = board();

    board.begin_drag();
    assert_eq!(board.release_drag(120.0), Some(NavigationKind::ChangeWeek(-1)));
    assert_eq!(board.begin_drag(), Outcome::Ignored);
    board.set_navigation_progress(1.0);
    assert_eq!(board.commit_navigation(), Some(-1));
}

#[test]
fn test_go_to_today() {
    let mut board = board();
    board.select_day(0).unwrap();
    board.next_week();

    assert_eq!(board.go_to_today(), Outcome::Ignored);

    board.commit_navigation();
    assert_eq!(board.go_to_today(), Outcome::Started);
    assert_eq!(board.week_offset(), 0);
    assert_eq!(board.selected_day(), 3);
}

#[test]
fn test_snapshot_reflects_selection() {
    let mut board = board();
    board.create_task("A").unwrap();

    let snapshot = board.snapshot();
    assert_eq!(snapshot.selected_day, 3);
    assert_eq!(snapshot.week.len(), 7);
    assert_eq!(snapshot.week[3].full_date, wednesday());
    assert_eq!(snapshot.visible_tasks.len(), 1);
    assert!(snapshot.offsets.values().all(|offset| offset.is_neutral()));
}
