//! Data access layer.
//!
//! One trait, four capabilities: find-by-id, find-all, find-by-filter and
//! save, implemented against MongoDB for production and against in-process
//! maps for tests and local development. Resolvers never see anything but
//! [`DocumentStore`].

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::Result;
use crate::model::{Project, Task};

/// Pass-through access to the two document collections.
///
/// Every method maps to exactly one operation on the underlying store; there
/// is no caching or batching in front of it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // ─── Projects ──────────────────────────────────────────────

    /// Look a project up by id. `None` when no document matches.
    async fn find_project(&self, id: &ObjectId) -> Result<Option<Project>>;

    /// The full, unfiltered projects collection.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Persist a project and hand it back.
    async fn save_project(&self, project: Project) -> Result<Project>;

    // ─── Tasks ─────────────────────────────────────────────────

    /// Look a task up by id. `None` when no document matches.
    async fn find_task(&self, id: &ObjectId) -> Result<Option<Task>>;

    /// The full, unfiltered tasks collection.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// All tasks whose `projectId` references the given project.
    async fn tasks_for_project(&self, project_id: &ObjectId) -> Result<Vec<Task>>;

    /// Persist a task and hand it back.
    async fn save_task(&self, task: Task) -> Result<Task>;
}
