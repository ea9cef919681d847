//! GraphQL API for taskboard.
//!
//! Two object types, four queries, two mutations — each resolver is a
//! direct pass-through to one store call.
//!
//! ## Example
//!
//! ```graphql
//! # One project with its tasks
//! { project(id: "657f1f77bcf86cd799439011") { title tasks { title weight } } }
//!
//! # Create, then read back
//! mutation { addProject(title: "Advanced HTML", weight: 1, description: "basics") { id } }
//! ```

pub mod mutation;
pub mod query;
pub mod schema;

use async_graphql::{EmptySubscription, Schema, ID};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::error::ApiError;
use crate::store::DocumentStore;
use mutation::Mutation;
use query::Query;

/// The taskboard GraphQL schema type
pub type ApiSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the GraphQL schema with the document store as context
pub fn build_schema(store: Arc<dyn DocumentStore>) -> ApiSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(store)
        .finish()
}

/// Execute a GraphQL query and return JSON result
pub async fn execute(schema: &ApiSchema, query: &str) -> String {
    let result = schema.execute(query).await;
    serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
}

/// Parse an `ID` argument into an ObjectId.
///
/// A malformed id is an execution error, matching how the store itself
/// would reject it; a well-formed id that matches nothing is not.
pub(crate) fn parse_id(id: &ID) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| ApiError::InvalidId(id.to_string()))
}
