//! Embedded starter goals.
//!
//! First launch (and any unreadable goals file) shows these instead of an
//! empty dashboard. The JSON ships inside the binary and is parsed on
//! demand; a parse failure degrades to an empty list with a log line rather
//! than failing the caller.

use crate::types::Goal;

const STARTER_GOALS: &str = include_str!("../seed/starter_goals.json");

/// The built-in goal set used when no persisted goals exist.
pub fn starter_goals() -> Vec<Goal> {
    match serde_json::from_str(STARTER_GOALS) {
        Ok(goals) => goals,
        Err(err) => {
            log::error!("Embedded starter goals failed to parse: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GoalStatus;

    #[test]
    fn test_starter_goals_parse() {
        let goals = starter_goals();
        assert_eq!(goals.len(), 3);

        let guitar = &goals[0];
        assert_eq!(guitar.title, "Start learning to play guitar");
        assert_eq!(guitar.status, GoalStatus::NotStarted);
        assert_eq!(guitar.category, "Learning");
        assert_eq!(guitar.weekly_tasks.len(), 1);

        let practice = &guitar.weekly_tasks[0];
        assert_eq!(practice.title, "Guitar Practice");
        assert_eq!(practice.goal_id, guitar.id);
        assert_eq!(practice.day_of_week, 1);
        assert_eq!(practice.time_slot, "18:00");
        assert_eq!(practice.duration, 60);
    }

    #[test]
    fn test_starter_goals_include_one_in_progress() {
        let goals = starter_goals();
        let cert = goals
            .iter()
            .find(|g| g.status == GoalStatus::InProgress)
            .unwrap();
        assert_eq!(cert.progress, 35);
        assert_eq!(cert.category, "Career");
        assert_eq!(cert.weekly_tasks[0].day_of_week, 2);
    }

    #[test]
    fn test_task_back_references_are_consistent() {
        for goal in starter_goals() {
            for task in &goal.weekly_tasks {
                assert_eq!(task.goal_id, goal.id, "task {}", task.id);
            }
        }
    }
}
