use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use routine::ui::components::StatusMessage;
use routine::ui::core::{Action, Component, DialogType, EventType};
use routine::ui::AppComponent;
use std::time::{Duration, Instant};

use super::{app, key};

/// Feed a terminal event through the app the way the event loop does
fn press(app: &mut AppComponent, event: EventType, now: Instant) {
    let action = app.handle_event(event);
    app.update(action, now);
}

fn type_text(app: &mut AppComponent, text: &str, now: Instant) {
    for c in text.chars() {
        press(app, key(KeyCode::Char(c)), now);
    }
}

fn add_task(app: &mut AppComponent, title: &str, now: Instant) {
    press(app, key(KeyCode::Char('a')), now);
    type_text(app, title, now);
    press(app, key(KeyCode::Enter), now);
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_global_keys() {
    let mut app = app();

    assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Action::Quit);
    assert_eq!(
        app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
        Action::Quit
    );
    assert_eq!(app.handle_event(key(KeyCode::Char(']'))), Action::NextWeek);
    assert_eq!(app.handle_event(key(KeyCode::Left)), Action::PreviousDay);
    assert_eq!(
        app.handle_event(key(KeyCode::Char('G'))),
        Action::ShowDialog(DialogType::Logs)
    );
    assert_eq!(app.handle_event(EventType::Tick), Action::None);
}

#[test]
fn test_create_task_through_dialog() {
    let mut app = app();
    let now = Instant::now();

    add_task(&mut app, "Stretch", now);

    assert!(!app.is_dialog_visible());
    assert!(matches!(app.status(), Some(StatusMessage::Info(_))));
    let titles: Vec<String> = app.board().visible_tasks().iter().map(|task| task.title.clone()).collect();
    assert_eq!(titles, vec!["Stretch"]);
}

#[test]
fn test_blank_title_keeps_dialog_open() {
    let mut app = app();
    let now = Instant::now();

    add_task(&mut app, "   ", now);

    assert!(app.is_dialog_visible());
    assert!(matches!(app.status(), Some(StatusMessage::Error(_))));
    assert!(app.board().collection().is_empty());

    press(&mut app, key(KeyCode::Esc), now);
    assert!(!app.is_dialog_visible());
}

#[test]
fn test_past_day_creation_shows_error() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, key(KeyCode::Left), now);
    add_task(&mut app, "Too late", now);

    assert!(!app.is_dialog_visible());
    assert!(matches!(app.status(), Some(StatusMessage::Error(_))));
    assert!(app.board().collection().is_empty());
}

#[test]
fn test_toggle_commits_when_timeline_finishes() {
    let mut app = app();
    let now = Instant::now();
    add_task(&mut app, "A", now);
    add_task(&mut app, "B", now);

    // Cursor is on the newest task; move to the first one and toggle it
    press(&mut app, key(KeyCode::Up), now);
    press(&mut app, key(KeyCode::Char(' ')), now);
    assert!(app.is_animating());
    assert!(app.board().is_toggle_animating());

    assert!(app.on_tick(now + Duration::from_millis(600)));
    let first = app.board().visible_tasks()[0].id;
    assert!(!app.board().task(first).unwrap().completed);

    app.on_tick(now + Duration::from_millis(1300));
    assert!(!app.is_animating());
    let titles: Vec<String> = app.board().visible_tasks().iter().map(|task| task.title.clone()).collect();
    assert_eq!(titles, vec!["B", "A"]);
    assert!(app.board().visible_tasks()[1].completed);
}

#[test]
fn test_week_navigation_from_keyboard() {
    let mut app = app();
    let now = Instant::now();

    press(&mut app, key(KeyCode::Char(']')), now);
    assert_eq!(app.board().week_offset(), 0);

    app.on_tick(now + Duration::from_millis(400));
    assert_eq!(app.board().week_offset(), 1);

    press(&mut app, key(KeyCode::Char('t')), now);
    assert_eq!(app.board().week_offset(), 0);
    assert_eq!(app.board().selected_day(), 3);
}

#[test]
fn test_render_and_drag_week_strip() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains("Hi, Ada"));
    assert!(text.contains("Oct 18 - Oct 24, 2026"));

    // The strip sits right below the header line
    let now = Instant::now();
    let mouse = |kind, column| {
        EventType::Mouse(MouseEvent {
            kind,
            column,
            row: 2,
            modifiers: KeyModifiers::NONE,
        })
    };
    press(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 10), now);
    press(&mut app, mouse(MouseEventKind::Drag(MouseButton::Left), 40), now);
    assert_eq!(app.board().snapshot().week_strip_offset, 120.0);
    press(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 40), now);

    app.on_tick(now + Duration::from_millis(400));
    assert_eq!(app.board().week_offset(), -1);
}

#[test]
fn test_click_selects_day() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();

    let now = Instant::now();
    // Columns 1 to 7 hold the first day, just inside the border
    for kind in [MouseEventKind::Down(MouseButton::Left), MouseEventKind::Up(MouseButton::Left)] {
        press(
            &mut app,
            EventType::Mouse(MouseEvent {
                kind,
                column: 2,
                row: 2,
                modifiers: KeyModifiers::NONE,
            }),
            now,
        );
    }

    assert_eq!(app.board().selected_day(), 0);
    app.on_tick(now + Duration::from_millis(400));
    assert_eq!(app.board().week_offset(), 0);
}

#[test]
fn test_delete_with_confirmation() {
    let mut app = app();
    let now = Instant::now();
    add_task(&mut app, "Temporary", now);

    press(&mut app, key(KeyCode::Char('d')), now);
    assert!(app.is_dialog_visible());
    press(&mut app, key(KeyCode::Char('y')), now);

    assert!(!app.is_dialog_visible());
    assert!(app.board().collection().is_empty());
}

#[test]
fn test_task_list_scrolls_to_the_cursor() {
    let mut app = app();
    let now = Instant::now();
    for n in 0..12 {
        add_task(&mut app, &format!("Task{:02}", n), now);
    }
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();

    // The cursor follows the newest task to the bottom of the list
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Task11"));
    assert!(!text.contains("Task00"));
    assert_eq!(
        app.handle_event(key(KeyCode::Char(' '))),
        Action::ToggleTask(app.board().visible_tasks()[11].id)
    );

    // Wrapping to the first task scrolls back up
    press(&mut app, key(KeyCode::Char('j')), now);
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Task00"));
    assert!(!text.contains("Task11"));
}
