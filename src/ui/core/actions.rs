use crate::board::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Day and week navigation
    PreviousDay,
    NextDay,
    SelectDay(u8),
    PreviousWeek,
    NextWeek,
    GoToToday,

    // Week strip drag, distances in pixels
    DragStart,
    DragMove(f32),
    /// `day` is set when the pointer was released without moving
    DragEnd {
        dx: f32,
        day: Option<u8>,
    },

    // Task list selection
    NextTask,
    PreviousTask,

    // Task operations
    ToggleTask(TaskId),
    DeleteTask(TaskId),
    CreateTask {
        title: String,
    },
    EditTask {
        id: TaskId,
        title: String,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    TaskCreation,
    TaskEdit { task_id: TaskId, title: String },
    DeleteConfirmation { task_id: TaskId, title: String },
    Logs,
}
