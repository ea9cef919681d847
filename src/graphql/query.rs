//! GraphQL Query resolvers.
//!
//! Four pass-through reads. By-id lookups resolve to null rather than an
//! error when nothing matches; collection lookups return everything the
//! store holds, unfiltered and unpaginated.

use async_graphql::{Context, Object, Result, ID};
use std::sync::Arc;

use super::parse_id;
use super::schema::{Project, Task};
use crate::store::DocumentStore;

/// Root query type
pub struct Query;

#[Object]
impl Query {
    /// Fetch a single task by id
    async fn task(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Task>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let id = parse_id(&id)?;
        Ok(store.find_task(&id).await?.map(Task::from))
    }

    /// Fetch a single project by id
    async fn project(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Project>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let id = parse_id(&id)?;
        Ok(store.find_project(&id).await?.map(Project::from))
    }

    /// All tasks, across every project
    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        Ok(store.list_tasks().await?.into_iter().map(Task::from).collect())
    }

    /// All projects
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        Ok(store
            .list_projects()
            .await?
            .into_iter()
            .map(Project::from)
            .collect())
    }
}
