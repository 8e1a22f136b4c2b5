use chrono::NaiveDate;

use super::task::TaskId;
use crate::constants::{
    ERROR_EMPTY_TITLE, ERROR_FUTURE_COMPLETION, ERROR_INVALID_DAY, ERROR_PAST_DATE, ERROR_TASK_NOT_FOUND,
};

/// Rejections raised by board intents.
///
/// The display text is the message shown to the user. None of these leave
/// the board in a modified state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("{msg}", msg = ERROR_EMPTY_TITLE)]
    EmptyTitle,

    #[error("{msg} (requested {date})", msg = ERROR_PAST_DATE)]
    PastDate { date: NaiveDate },

    #[error("{msg} (task is due {date})", msg = ERROR_FUTURE_COMPLETION)]
    FutureCompletion { date: NaiveDate },

    #[error("{msg}: {0}", msg = ERROR_TASK_NOT_FOUND)]
    TaskNotFound(TaskId),

    #[error("{msg}, got {0}", msg = ERROR_INVALID_DAY)]
    InvalidDay(u8),
}
