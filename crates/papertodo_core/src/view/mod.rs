//! Read-only projections of the task collection.
//!
//! # Responsibility
//! - Partition the collection into active/completed views.
//! - Provide display formatting for creation dates.
//!
//! # Invariants
//! - Views are pure projections; they hold no independent state.
//! - Both partitions preserve collection order.

use crate::model::task::Task;
use chrono::{DateTime, Utc};

/// Active/completed partitions of the collection, derived on demand.
#[derive(Debug)]
pub struct BoardView<'a> {
    /// Open tasks, collection order preserved.
    pub active: Vec<&'a Task>,
    /// Completed tasks, collection order preserved.
    pub completed: Vec<&'a Task>,
}

/// Counter pair shown in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSummary {
    pub remaining: usize,
    pub completed: usize,
}

impl<'a> BoardView<'a> {
    /// Splits the collection by completion flag.
    pub fn derive(tasks: &'a [Task]) -> Self {
        let (completed, active): (Vec<&Task>, Vec<&Task>) =
            tasks.iter().partition(|task| task.completed);
        Self { active, completed }
    }

    /// Returns the remaining/completed counts.
    pub fn summary(&self) -> BoardSummary {
        BoardSummary {
            remaining: self.active.len(),
            completed: self.completed.len(),
        }
    }

    /// True when the underlying collection has no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.completed.is_empty()
    }
}

/// Short display form of a creation date, e.g. `Aug 6`.
pub fn short_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d").to_string()
}

/// Long heading form of a date, e.g. `Wednesday, August 6`.
pub fn heading_date(instant: DateTime<Utc>) -> String {
    instant.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::{heading_date, short_date};
    use chrono::{TimeZone, Utc};

    #[test]
    fn short_date_uses_abbreviated_month_without_padding() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        assert_eq!(short_date(instant), "Aug 6");
    }

    #[test]
    fn heading_date_spells_out_weekday_and_month() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap();
        assert_eq!(heading_date(instant), "Thursday, August 6");
    }
}
