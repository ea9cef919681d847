//! GraphQL schema types.
//!
//! The two object types and their mutually-referencing relational fields.
//! Each relational field issues one store call per invocation; nested
//! selections fan out into the N+1 pattern the API accepts by design.

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::model;
use crate::store::DocumentStore;

/// A project with its owned tasks.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Project {
    /// Project title
    pub title: String,
    /// Relative weight in the curriculum
    pub weight: i32,
    /// Long-form description
    pub description: String,
    /// Backing document id (not exposed directly)
    #[graphql(skip)]
    pub doc_id: ObjectId,
}

#[ComplexObject]
impl Project {
    /// System-generated identifier
    async fn id(&self) -> ID {
        ID(self.doc_id.to_hex())
    }

    /// Tasks referencing this project
    async fn tasks(&self, ctx: &Context<'_>) -> Result<Vec<Task>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let tasks = store.tasks_for_project(&self.doc_id).await?;
        Ok(tasks.into_iter().map(Task::from).collect())
    }
}

impl From<model::Project> for Project {
    fn from(doc: model::Project) -> Self {
        Self {
            title: doc.title,
            weight: doc.weight,
            description: doc.description,
            doc_id: doc.id,
        }
    }
}

/// A task belonging to a project.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Task {
    /// Task title
    pub title: String,
    /// Relative weight within the project
    pub weight: i32,
    /// Long-form description
    pub description: String,
    #[graphql(skip)]
    pub doc_id: ObjectId,
    #[graphql(skip)]
    pub project_ref: ObjectId,
}

#[ComplexObject]
impl Task {
    /// System-generated identifier
    async fn id(&self) -> ID {
        ID(self.doc_id.to_hex())
    }

    /// The owning project, or null when the reference is dangling
    async fn project(&self, ctx: &Context<'_>) -> Result<Option<Project>> {
        let store = ctx.data::<Arc<dyn DocumentStore>>()?;
        let project = store.find_project(&self.project_ref).await?;
        Ok(project.map(Project::from))
    }
}

impl From<model::Task> for Task {
    fn from(doc: model::Task) -> Self {
        Self {
            title: doc.title,
            weight: doc.weight,
            description: doc.description,
            doc_id: doc.id,
            project_ref: doc.project_id,
        }
    }
}
