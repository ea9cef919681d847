//! MongoDB store.

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::DocumentStore;
use crate::config::Config;
use crate::error::Result;
use crate::model::{Project, Task};

/// Typed handles on the `projects` and `tasks` collections.
///
/// The driver pools connections internally; cloning the handles is cheap and
/// the store holds no other state.
pub struct MongoStore {
    projects: Collection<Project>,
    tasks: Collection<Task>,
}

impl MongoStore {
    /// Connect to the configured database and verify it answers.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.database_url).await?;
        let db = client.database(&config.database_name);

        // Fail at startup rather than on the first query.
        db.run_command(doc! { "ping": 1 }, None).await?;
        info!(database = %config.database_name, "connected to database");

        Ok(Self {
            projects: db.collection("projects"),
            tasks: db.collection("tasks"),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_project(&self, id: &ObjectId) -> Result<Option<Project>> {
        Ok(self.projects.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let cursor = self.projects.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save_project(&self, project: Project) -> Result<Project> {
        self.projects.insert_one(&project, None).await?;
        debug!(id = %project.id, "project saved");
        Ok(project)
    }

    async fn find_task(&self, id: &ObjectId) -> Result<Option<Task>> {
        Ok(self.tasks.find_one(doc! { "_id": *id }, None).await?)
    }

    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let cursor = self.tasks.find(doc! {}, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn tasks_for_project(&self, project_id: &ObjectId) -> Result<Vec<Task>> {
        let cursor = self
            .tasks
            .find(doc! { "projectId": *project_id }, None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn save_task(&self, task: Task) -> Result<Task> {
        self.tasks.insert_one(&task, None).await?;
        debug!(id = %task.id, "task saved");
        Ok(task)
    }
}
