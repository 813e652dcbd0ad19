//! Month view assembly.
//!
//! The month tab colors each calendar day by how many recurring tasks fall
//! on that weekday and, when a date is selected, lists those tasks joined
//! with their owning goal's title.

use chrono::NaiveDate;

use crate::types::{Goal, MonthOverview, ScheduledTask};
use crate::weekday_tasks;

/// Per-weekday badge totals (Sunday = 0) across all goals.
pub fn month_overview(goals: &[Goal]) -> MonthOverview {
    MonthOverview {
        weekday_counts: weekday_tasks::weekday_task_counts(goals),
    }
}

/// Detail rows for a selected date, in goal-then-task order.
pub fn day_schedule(date: NaiveDate, goals: &[Goal]) -> Vec<ScheduledTask> {
    weekday_tasks::scheduled_for_weekday(weekday_tasks::weekday_index(date), goals)
        .into_iter()
        .map(|(goal, task)| ScheduledTask {
            task_id: task.id.clone(),
            goal_id: goal.id.clone(),
            title: task.title.clone(),
            goal_title: goal.title.clone(),
            time_slot: task.time_slot.clone(),
            duration: task.duration,
            is_completed: task.is_completed,
        })
        .collect()
}
