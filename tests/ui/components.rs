use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use routine::ui::components::{DialogComponent, TaskListComponent};
use routine::ui::core::{Action, Component, DialogType};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_input_dialog_collects_title() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskCreation);

    for c in "Runx".chars() {
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char(c))), Action::None);
    }
    dialog.handle_key_events(key(KeyCode::Backspace));

    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::CreateTask {
            title: "Run".to_string()
        }
    );
}

#[test]
fn test_edit_dialog_is_prefilled() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskEdit {
        task_id: 7,
        title: "Old".to_string(),
    });
    assert_eq!(dialog.input_buffer, "Old");

    dialog.handle_key_events(key(KeyCode::Char('!')));
    assert_eq!(
        dialog.handle_key_events(key(KeyCode::Enter)),
        Action::EditTask {
            id: 7,
            title: "Old!".to_string()
        }
    );
}

#[test]
fn test_delete_confirmation_keys() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::DeleteConfirmation {
        task_id: 3,
        title: "Gone".to_string(),
    });

    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('x'))), Action::None);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog);
    assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::DeleteTask(3));
}

#[test]
fn test_hidden_dialog_ignores_keys() {
    let mut dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
    assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);

    dialog.show(DialogType::Logs);
    assert!(dialog.is_visible());
    dialog.hide();
    assert!(!dialog.is_visible());
}

#[test]
fn test_empty_task_list_keys() {
    let mut list = TaskListComponent::new();

    assert!(list.selected_task().is_none());
    assert_eq!(list.handle_key_events(key(KeyCode::Char(' '))), Action::None);
    assert_eq!(list.handle_key_events(key(KeyCode::Char('e'))), Action::None);
    assert_eq!(
        list.handle_key_events(key(KeyCode::Char('a'))),
        Action::ShowDialog(DialogType::TaskCreation)
    );
    assert_eq!(list.handle_key_events(key(KeyCode::Down)), Action::NextTask);
}
