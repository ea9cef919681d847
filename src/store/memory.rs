//! In-memory store.
//!
//! Backs the test suite and `serve --in-memory`. Documents live in plain
//! maps and vanish when the process exits.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::Result;
use crate::model::{Project, Task};

/// A [`DocumentStore`] over two `RwLock`-guarded maps.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<ObjectId, Project>>,
    tasks: RwLock<HashMap<ObjectId, Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_project(&self, id: &ObjectId) -> Result<Option<Project>> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.read().await.values().cloned().collect())
    }

    async fn save_project(&self, project: Project) -> Result<Project> {
        self.projects
            .write()
            .await
            .insert(project.id, project.clone());
        Ok(project)
    }

    async fn find_task(&self, id: &ObjectId) -> Result<Option<Task>> {
        Ok(self.tasks.read().await.get(id).cloned())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().await.values().cloned().collect())
    }

    async fn tasks_for_project(&self, project_id: &ObjectId) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.project_id == *project_id)
            .cloned()
            .collect())
    }

    async fn save_task(&self, task: Task) -> Result<Task> {
        self.tasks.write().await.insert(task.id, task.clone());
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_find_project() {
        let store = MemoryStore::new();
        let saved = store
            .save_project(Project::new("Advanced HTML".to_string(), 1, "basics".to_string()))
            .await
            .unwrap();

        let found = store.find_project(&saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Advanced HTML");
        assert_eq!(found.weight, 1);
    }

    #[tokio::test]
    async fn test_find_missing_project_is_none() {
        let store = MemoryStore::new();
        let found = store.find_project(&ObjectId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_tasks_for_project_filters_by_reference() {
        let store = MemoryStore::new();
        let project = store
            .save_project(Project::new("p".to_string(), 1, "d".to_string()))
            .await
            .unwrap();
        let other = ObjectId::new();

        store
            .save_task(Task::new("a".to_string(), 1, "d".to_string(), project.id))
            .await
            .unwrap();
        store
            .save_task(Task::new("b".to_string(), 2, "d".to_string(), project.id))
            .await
            .unwrap();
        store
            .save_task(Task::new("c".to_string(), 3, "d".to_string(), other))
            .await
            .unwrap();

        let tasks = store.tasks_for_project(&project.id).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.project_id == project.id));

        let all = store.list_tasks().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_dangling_reference_is_allowed() {
        // Referential integrity is not the store's job.
        let store = MemoryStore::new();
        let task = store
            .save_task(Task::new("t".to_string(), 1, "d".to_string(), ObjectId::new()))
            .await
            .unwrap();

        assert!(store.find_task(&task.id).await.unwrap().is_some());
        assert!(store.find_project(&task.project_id).await.unwrap().is_none());
    }
}
