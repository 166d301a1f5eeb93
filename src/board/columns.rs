use crate::models::{Task, TaskStatus};

/// Partition of a task snapshot into the three fixed columns.
///
/// Order within a column is whatever order the store returned; tasks are
/// never re-sorted client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnAssignment {
    todo: Vec<Task>,
    ongoing: Vec<Task>,
    completed: Vec<Task>,
}

impl ColumnAssignment {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut assignment = Self::default();
        for task in tasks {
            assignment.column_mut(task.status).push(task.clone());
        }
        assignment
    }

    pub fn tasks_for(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::Ongoing => &self.ongoing,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Total tasks across all three columns.
    pub fn len(&self) -> usize {
        self.todo.len() + self.ongoing.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::Ongoing => &mut self.ongoing,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskId, TasksResponse};

    fn task(id: &str, title: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::new(id),
            title: title.to_string(),
            status,
        }
    }

    #[test]
    fn partition_covers_every_task_exactly_once() {
        let snapshot = vec![
            task("1", "a", TaskStatus::Todo),
            task("2", "b", TaskStatus::Completed),
            task("3", "c", TaskStatus::Todo),
            task("4", "d", TaskStatus::Ongoing),
            task("5", "e", TaskStatus::Todo),
        ];
        let assignment = ColumnAssignment::from_tasks(&snapshot);

        for status in TaskStatus::all() {
            for t in assignment.tasks_for(status) {
                assert_eq!(t.status, status);
            }
        }
        assert_eq!(assignment.len(), snapshot.len());

        // Union of the columns is the snapshot, no duplicates or omissions.
        let mut seen: Vec<&TaskId> = TaskStatus::all()
            .iter()
            .flat_map(|s| assignment.tasks_for(*s).iter().map(|t| &t.id))
            .collect();
        seen.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        seen.dedup();
        assert_eq!(seen.len(), snapshot.len());
    }

    #[test]
    fn store_order_is_preserved_within_a_column() {
        let snapshot = vec![
            task("9", "third", TaskStatus::Todo),
            task("2", "first", TaskStatus::Todo),
            task("5", "second", TaskStatus::Todo),
        ];
        let assignment = ColumnAssignment::from_tasks(&snapshot);
        let titles: Vec<&str> = assignment
            .tasks_for(TaskStatus::Todo)
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(titles, ["third", "first", "second"]);
    }

    #[test]
    fn sample_store_payload_renders_expected_columns() {
        let body = r#"{"tasks":[
            {"id":1,"title":"Write spec","status":"todo"},
            {"id":2,"title":"Review","status":"completed"}
        ]}"#;
        let parsed: TasksResponse = serde_json::from_str(body).unwrap();
        let assignment = ColumnAssignment::from_tasks(&parsed.tasks);

        let todo = assignment.tasks_for(TaskStatus::Todo);
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].title, "Write spec");

        assert!(assignment.tasks_for(TaskStatus::Ongoing).is_empty());

        let completed = assignment.tasks_for(TaskStatus::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "Review");
    }

    #[test]
    fn assignment_is_deterministic() {
        let snapshot = vec![
            task("1", "a", TaskStatus::Ongoing),
            task("2", "b", TaskStatus::Todo),
        ];
        assert_eq!(
            ColumnAssignment::from_tasks(&snapshot),
            ColumnAssignment::from_tasks(&snapshot)
        );
    }

    #[test]
    fn empty_snapshot_yields_empty_columns() {
        let assignment = ColumnAssignment::from_tasks(&[]);
        assert!(assignment.is_empty());
        for status in TaskStatus::all() {
            assert!(assignment.tasks_for(status).is_empty());
        }
    }
}
