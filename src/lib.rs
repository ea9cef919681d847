//! # Taskboard
//!
//! A minimal GraphQL API over two related document collections: projects
//! and the tasks that belong to them.
//!
//! Resolvers are direct pass-throughs to the document store — no caching,
//! no batching, no cross-request coordination. The interesting surface is
//! the type graph itself: `Task.project` follows the foreign key forward,
//! `Project.tasks` looks it up in reverse, and both resolve lazily with one
//! store call per invocation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskboard::{build_schema, MemoryStore};
//!
//! # async fn demo() {
//! let schema = build_schema(Arc::new(MemoryStore::new()));
//! let response = schema.execute("{ projects { id title } }").await;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graphql;
pub mod model;
pub mod server;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use error::{ApiError, Result};
pub use graphql::{build_schema, execute, ApiSchema};
pub use model::{Project, Task};
pub use store::{DocumentStore, MemoryStore, MongoStore};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_and_read_back() {
        // Full pipeline: mutation through the schema, then query the
        // created project back by id.
        let schema = build_schema(Arc::new(MemoryStore::new()));

        let result = execute(
            &schema,
            r#"mutation { addProject(title: "Bootstrap", weight: 2, description: "CSS framework") { id } }"#,
        )
        .await;
        assert!(!result.contains("errors"), "mutation failed: {}", result);

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        let id = parsed["data"]["addProject"]["id"].as_str().unwrap();

        let result = execute(
            &schema,
            &format!(r#"{{ project(id: "{}") {{ title weight description }} }}"#, id),
        )
        .await;
        assert!(result.contains("Bootstrap"));
        assert!(result.contains("CSS framework"));
    }

    #[tokio::test]
    async fn test_task_project_relation() {
        let schema = build_schema(Arc::new(MemoryStore::new()));

        let result = execute(
            &schema,
            r#"mutation { addProject(title: "Advanced HTML", weight: 1, description: "basics") { id } }"#,
        )
        .await;
        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        let project_id = parsed["data"]["addProject"]["id"].as_str().unwrap().to_string();

        let result = execute(
            &schema,
            &format!(
                r#"mutation {{ addTask(title: "Create your first webpage", weight: 1, description: "html file", projectId: "{}") {{ id project {{ id title }} }} }}"#,
                project_id
            ),
        )
        .await;

        let parsed: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(
            parsed["data"]["addTask"]["project"]["id"].as_str().unwrap(),
            project_id
        );
        assert_eq!(
            parsed["data"]["addTask"]["project"]["title"].as_str().unwrap(),
            "Advanced HTML"
        );
    }
}
