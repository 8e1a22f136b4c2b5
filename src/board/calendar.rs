use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::utils::datetime::{add_days, days_since_week_start, start_of_week, weekday_short_name};

/// One column of the day selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    /// Index in the week, 0 = first day
    pub index: u8,
    pub day_label: &'static str,
    pub day_of_month: u32,
    pub full_date: NaiveDate,
    pub is_today: bool,
}

/// Week arithmetic relative to an anchor date.
///
/// Week offsets count whole weeks from the week containing the anchor. The
/// board pins its anchor when it is built so that an offset keeps naming the
/// same seven dates for the whole session, even after midnight moves "today"
/// into another week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calendar {
    week_start: Weekday,
}

impl Calendar {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// First day of the week `week_offset` weeks away from the week containing `anchor`
    pub fn first_day(&self, anchor: NaiveDate, week_offset: i32) -> NaiveDate {
        add_days(start_of_week(anchor, self.week_start), week_offset as i64 * 7)
    }

    /// The date `(day, week_offset)` stands for
    pub fn resolve_date(&self, anchor: NaiveDate, day: u8, week_offset: i32) -> NaiveDate {
        add_days(self.first_day(anchor, week_offset), day as i64)
    }

    /// Offset of the week containing `date`, counted from the anchor's week
    pub fn week_offset_of(&self, anchor: NaiveDate, date: NaiveDate) -> i32 {
        let days = (start_of_week(date, self.week_start) - start_of_week(anchor, self.week_start)).num_days();
        (days / 7) as i32
    }

    /// Index of today inside its own week
    pub fn today_index(&self, today: NaiveDate) -> u8 {
        days_since_week_start(today, self.week_start)
    }

    /// The seven days of the week `week_offset` weeks away from the anchor's
    /// week, with `today` flagged
    pub fn compute_week(&self, anchor: NaiveDate, week_offset: i32, today: NaiveDate) -> Vec<WeekDay> {
        let first = self.first_day(anchor, week_offset);
        (0..7u8)
            .map(|index| {
                let date = add_days(first, index as i64);
                WeekDay {
                    index,
                    day_label: weekday_short_name(date.weekday()),
                    day_of_month: date.day(),
                    full_date: date,
                    is_today: date == today,
                }
            })
            .collect()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}
