//! Document types stored in the `projects` and `tasks` collections.
//!
//! Ids are generated client-side at construction time, so a freshly saved
//! document already carries the identifier the mutation response needs.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A project owning zero or more tasks by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub weight: i32,
    pub description: String,
}

impl Project {
    pub fn new(title: String, weight: i32, description: String) -> Self {
        Self {
            id: ObjectId::new(),
            title,
            weight,
            description,
        }
    }
}

/// A task referencing its owning project.
///
/// `project_id` is a plain foreign key; nothing checks that the referenced
/// project exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub weight: i32,
    pub description: String,
    #[serde(rename = "projectId")]
    pub project_id: ObjectId,
}

impl Task {
    pub fn new(title: String, weight: i32, description: String, project_id: ObjectId) -> Self {
        Self {
            id: ObjectId::new(),
            title,
            weight,
            description,
            project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_field_names() {
        // The stored document must use Mongo's conventional key names,
        // not the Rust field names.
        let task = Task::new("t".to_string(), 1, "d".to_string(), ObjectId::new());
        let doc = mongodb::bson::to_document(&task).unwrap();
        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("projectId"));
        assert!(!doc.contains_key("project_id"));
    }

    #[test]
    fn test_new_generates_distinct_ids() {
        let a = Project::new("a".to_string(), 1, "d".to_string());
        let b = Project::new("b".to_string(), 1, "d".to_string());
        assert_ne!(a.id, b.id);
    }
}
