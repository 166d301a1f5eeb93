use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// The three fixed columns of the board, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Ongoing,
    Completed,
}

impl TaskStatus {
    /// Wire/DOM identifier for this status (`todo`, `ongoing`, `completed`).
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Ongoing => "ongoing",
            TaskStatus::Completed => "completed",
        }
    }

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::Ongoing => "Ongoing",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [TaskStatus::Todo, TaskStatus::Ongoing, TaskStatus::Completed]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque task identifier, stable across moves.
///
/// The store emits integer ids today but owns the id format; the client
/// accepts either a JSON number or a JSON string and only ever echoes the
/// id back in request paths.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        TaskId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = TaskId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer task id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TaskId, E> {
                Ok(TaskId::new(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<TaskId, E> {
                Ok(TaskId::new(value.to_string()))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<TaskId, E> {
                Ok(TaskId::new(value.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Transient, read-only snapshot of a store-owned task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
}

/// Envelope returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_lowercase_names() {
        for status in TaskStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: TaskStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn task_id_accepts_integers_and_strings() {
        let from_number: TaskId = serde_json::from_str("42").unwrap();
        let from_string: TaskId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn list_envelope_parses_store_payload() {
        let body = r#"{"tasks":[
            {"id":1,"title":"Write spec","status":"todo"},
            {"id":2,"title":"Review","status":"completed"}
        ]}"#;
        let parsed: TasksResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tasks.len(), 2);
        assert_eq!(parsed.tasks[0].title, "Write spec");
        assert_eq!(parsed.tasks[0].status, TaskStatus::Todo);
        assert_eq!(parsed.tasks[1].id, TaskId::new("2"));
        assert_eq!(parsed.tasks[1].status, TaskStatus::Completed);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<Task, _> =
            serde_json::from_str(r#"{"id":1,"title":"x","status":"archived"}"#);
        assert!(result.is_err());
    }
}
