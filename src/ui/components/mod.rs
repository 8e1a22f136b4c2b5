pub mod dialogs;
pub mod status_bar;
pub mod task_list;
pub mod week_strip;

pub use dialogs::DialogComponent;
pub use status_bar::{StatusBar, StatusMessage};
pub use task_list::TaskListComponent;
pub use week_strip::WeekStripComponent;
