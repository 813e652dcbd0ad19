//! Day-of-week projection of recurring weekly tasks.
//!
//! Weekday indexing follows the convention the data was persisted with:
//! 0 = Sunday through 6 = Saturday. The week grid lists matching tasks under
//! each day header; the month view renders per-weekday totals as badge
//! markers and a per-date detail panel.

use chrono::{Datelike, NaiveDate};

use crate::types::{Goal, WeeklyTask};

/// Weekday index of a date, Sunday = 0.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Tasks scheduled on a weekday, in input order.
///
/// A `day_of_week` outside 0..6 on a task never equals a real weekday
/// index, so such tasks drop out of every projection without erroring.
pub fn tasks_for_weekday(day_of_week: u8, tasks: &[WeeklyTask]) -> Vec<&WeeklyTask> {
    tasks
        .iter()
        .filter(|task| task.day_of_week == day_of_week)
        .collect()
}

/// Tasks scheduled on the weekday of a concrete date.
pub fn tasks_for_date(date: NaiveDate, tasks: &[WeeklyTask]) -> Vec<&WeeklyTask> {
    tasks_for_weekday(weekday_index(date), tasks)
}

/// Tasks across all goals scheduled on a weekday, joined with their owning
/// goal, in goal-then-task input order.
pub fn scheduled_for_weekday(day_of_week: u8, goals: &[Goal]) -> Vec<(&Goal, &WeeklyTask)> {
    goals
        .iter()
        .flat_map(|goal| {
            goal.weekly_tasks
                .iter()
                .filter(|task| task.day_of_week == day_of_week)
                .map(move |task| (goal, task))
        })
        .collect()
}

/// Per-weekday task totals across all goals, indexed Sunday = 0.
pub fn weekday_task_counts(goals: &[Goal]) -> [usize; 7] {
    let mut counts = [0usize; 7];
    for goal in goals {
        for task in &goal.weekly_tasks {
            if let Some(slot) = counts.get_mut(task.day_of_week as usize) {
                *slot += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GoalStatus;

    fn task(id: &str, goal_id: &str, title: &str, day_of_week: u8, time_slot: &str) -> WeeklyTask {
        WeeklyTask {
            id: id.to_string(),
            goal_id: goal_id.to_string(),
            title: title.to_string(),
            description: None,
            duration: 60,
            day_of_week,
            time_slot: time_slot.to_string(),
            is_completed: false,
        }
    }

    fn goal(id: &str, title: &str, tasks: Vec<WeeklyTask>) -> Goal {
        Goal {
            id: id.to_string(),
            title: title.to_string(),
            status: GoalStatus::NotStarted,
            progress: 0,
            category: "Learning".to_string(),
            description: None,
            start_date: None,
            target_date: None,
            weekly_tasks: tasks,
        }
    }

    #[test]
    fn test_tasks_filter_by_weekday() {
        let tasks = vec![
            task("t1", "g1", "Guitar Practice", 1, "18:00"),
            task("t2", "g2", "Study Session", 2, "19:00"),
        ];

        let monday = tasks_for_weekday(1, &tasks);
        assert_eq!(monday.len(), 1);
        assert_eq!(monday[0].title, "Guitar Practice");

        assert!(tasks_for_weekday(0, &tasks).is_empty());
    }

    #[test]
    fn test_date_projection_uses_sunday_zero_indexing() {
        let tasks = vec![
            task("t1", "g1", "Guitar Practice", 1, "18:00"),
            task("t2", "g1", "Weekly Review", 0, "11:00"),
        ];

        // 2024-01-15 is a Monday, 2024-01-21 a Sunday.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        assert_eq!(weekday_index(monday), 1);
        assert_eq!(weekday_index(sunday), 0);

        assert_eq!(tasks_for_date(monday, &tasks)[0].id, "t1");
        assert_eq!(tasks_for_date(sunday, &tasks)[0].id, "t2");
    }

    #[test]
    fn test_out_of_range_day_never_matches() {
        let tasks = vec![task("t1", "g1", "Orphaned", 9, "18:00")];
        for day_of_week in 0..7 {
            assert!(tasks_for_weekday(day_of_week, &tasks).is_empty());
        }
        let goals = vec![goal("g1", "Anything", tasks)];
        assert_eq!(weekday_task_counts(&goals), [0; 7]);
    }

    #[test]
    fn test_scheduled_for_weekday_joins_goals_in_order() {
        let goals = vec![
            goal(
                "g1",
                "Learn guitar",
                vec![task("t1", "g1", "Guitar Practice", 1, "18:00")],
            ),
            goal(
                "g2",
                "Certificate",
                vec![
                    task("t2", "g2", "Study Session", 2, "19:00"),
                    task("t3", "g2", "Flashcards", 1, "08:00"),
                ],
            ),
        ];

        let monday = scheduled_for_weekday(1, &goals);
        let seen: Vec<(&str, &str)> = monday
            .iter()
            .map(|(g, t)| (g.title.as_str(), t.title.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![("Learn guitar", "Guitar Practice"), ("Certificate", "Flashcards")]
        );
    }

    #[test]
    fn test_weekday_counts_aggregate_across_goals() {
        let goals = vec![
            goal(
                "g1",
                "Learn guitar",
                vec![
                    task("t1", "g1", "Guitar Practice", 1, "18:00"),
                    task("t2", "g1", "Jam", 6, "15:00"),
                ],
            ),
            goal(
                "g2",
                "Certificate",
                vec![task("t3", "g2", "Study Session", 1, "19:00")],
            ),
            goal("g3", "German", vec![]),
        ];

        assert_eq!(weekday_task_counts(&goals), [0, 2, 0, 0, 0, 0, 1]);
    }
}
