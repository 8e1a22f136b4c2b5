//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_TASK_CREATED: &str = "✅ Task added";
pub const SUCCESS_TASK_DELETED: &str = "✅ Task deleted";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";
pub const SUCCESS_TASK_COMPLETED: &str = "✅ Task completed";
pub const SUCCESS_TASK_REOPENED: &str = "↩️ Task marked as not done";

// Validation Error Messages
pub const ERROR_EMPTY_TITLE: &str = "❌ Please enter a task title";
pub const ERROR_PAST_DATE: &str = "❌ Tasks can only be added for today, tomorrow, and future dates";
pub const ERROR_FUTURE_COMPLETION: &str = "❌ Only tasks for today, yesterday, and past dates can be completed";
pub const ERROR_INVALID_DAY: &str = "❌ Day index must be between 0 and 6";
pub const ERROR_TASK_NOT_FOUND: &str = "❌ Task not found";

// Profile Messages
pub const ERROR_NOT_AUTHENTICATED: &str = "User not authenticated";
pub const ERROR_NO_PROFILE_IMAGE: &str = "No profile image found";
pub const ERROR_EMPTY_DISPLAY_NAME: &str = "Display name cannot be empty";
/// Prefix of the local cache key holding a user's profile image reference
pub const PROFILE_IMAGE_KEY_PREFIX: &str = "@profile_image_";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const STATUS_HINTS: &str = "a: add • e: edit • Space: toggle • d: delete • ←/→: day • [/]: week • t: today • q: quit";
pub const DIALOG_TITLE_NEW_TASK: &str = "New task - Enter to add, Esc to cancel";
pub const DIALOG_TITLE_EDIT_TASK: &str = "Edit task - Enter to save, Esc to cancel";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'G' to close";
pub const EMPTY_DAY_MESSAGE: &str = "No tasks for this day";

// Layout
/// Pixel height of one task row (80px card + 16px margin). Every displacement is a multiple of this.
pub const ROW_HEIGHT: f32 = 96.0;
/// Terminal lines used to draw one task row
pub const ROW_LINES: u16 = 3;
/// Opacity of the task being toggled while it slides
pub const ANIMATING_OPACITY: f32 = 0.8;

// Animation defaults
pub const DEFAULT_TOGGLE_DURATION_MS: u64 = 1200;
pub const DEFAULT_NAVIGATION_DURATION_MS: u64 = 300;
pub const DEFAULT_SPRING_BACK_DURATION_MS: u64 = 200;
/// Minimum horizontal drag distance, in pixels, that changes the week
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;
/// Horizontal distance a week strip travels during a week change
pub const WEEK_SLIDE_DISTANCE: f32 = 360.0;
pub const MAX_ANIMATION_DURATION_MS: u64 = 10_000;
/// Pixels of drag represented by one terminal column
pub const PIXELS_PER_COLUMN: f32 = 4.0;
/// Frame interval for animation ticks (~60 FPS)
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Card color pairs as (background, accent)
pub const TASK_PALETTE: [(&str, &str); 6] = [
    ("#FFF4E5", "#FF9500"),
    ("#E8F5E9", "#34C759"),
    ("#E3F2FD", "#007AFF"),
    ("#F3E5F5", "#AF52DE"),
    ("#FFEBEE", "#FF3B30"),
    ("#E0F7FA", "#5AC8FA"),
];
