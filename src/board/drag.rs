use crate::models::{TaskId, TaskStatus};

/// Immutable message captured at drag-start and consumed on drop.
///
/// Carried through a typed in-memory slot rather than string-keyed
/// `DataTransfer` entries, so the drop handler never parses browser state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub source: TaskStatus,
}

/// Outcome of a drop gesture on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// No request is issued: foreign or malformed drag, or a drop on the
    /// task's own column.
    Ignore,
    /// Ask the store to move `task_id` to `target`, then re-fetch.
    Move { task_id: TaskId, target: TaskStatus },
}

/// Transition rule for a drop on the column `target`.
pub fn decide_drop(payload: Option<&DragPayload>, target: TaskStatus) -> DropAction {
    let Some(payload) = payload else {
        // Drag originated outside the board; fail silently.
        return DropAction::Ignore;
    };
    if payload.task_id.is_empty() || payload.source == target {
        return DropAction::Ignore;
    }
    DropAction::Move {
        task_id: payload.task_id.clone(),
        target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: &str, source: TaskStatus) -> DragPayload {
        DragPayload {
            task_id: TaskId::new(id),
            source,
        }
    }

    #[test]
    fn drop_on_own_column_is_a_no_op() {
        let p = payload("T1", TaskStatus::Todo);
        assert_eq!(decide_drop(Some(&p), TaskStatus::Todo), DropAction::Ignore);
    }

    #[test]
    fn drop_on_another_column_moves_the_task() {
        let p = payload("T1", TaskStatus::Todo);
        assert_eq!(
            decide_drop(Some(&p), TaskStatus::Ongoing),
            DropAction::Move {
                task_id: TaskId::new("T1"),
                target: TaskStatus::Ongoing,
            }
        );
    }

    #[test]
    fn missing_payload_is_ignored() {
        assert_eq!(decide_drop(None, TaskStatus::Completed), DropAction::Ignore);
    }

    #[test]
    fn empty_task_id_is_ignored() {
        let p = payload("", TaskStatus::Todo);
        assert_eq!(
            decide_drop(Some(&p), TaskStatus::Completed),
            DropAction::Ignore
        );
    }
}
