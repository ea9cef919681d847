//! GraphQL Mutation resolvers.
//!
//! Two write operations. Each builds a document from its required arguments,
//! saves it, and returns the persisted entity including the generated id.
//! Persistence failures propagate as generic execution errors; there are no
//! retries and no referential checks.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;

use super::parse_id;
use super::schema::{Project, Task};
use crate::model;
use crate::store::DocumentStore;

/// Root mutation type
pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a project
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        title: String,
        weight: i32,
        description: String,
    ) -> Result<Project> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let project = store
            .save_project(model::Project::new(title, weight, description))
            .await?;
        Ok(Project::from(project))
    }

    /// Create a task attached to a project.
    ///
    /// The referenced project is not checked for existence; a task may carry
    /// a dangling `projectId`, in which case its `project` field resolves to
    /// null.
    async fn add_task(
        &self,
        ctx: &Context<'_>,
        title: String,
        weight: i32,
        description: String,
        project_id: ID,
    ) -> Result<Task> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let project_id = parse_id(&project_id)?;
        let task = store
            .save_task(model::Task::new(title, weight, description, project_id))
            .await?;
        Ok(Task::from(task))
    }
}
