//! Task service trait
//!
//! Defines the interface for the remote task operations.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Remote CRUD operations on tasks
///
/// Each call issues exactly one request. Dropping the returned future
/// cancels it.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Fetch the whole task collection
    async fn list(&self) -> Result<Vec<Task>>;

    /// Fetch a single task, failing with `Error::TaskNotFound` if it does not exist
    async fn get(&self, id: u64) -> Result<Task>;

    /// Create a task and return it with its server-assigned id
    async fn create(&self, task: &Task) -> Result<Task>;

    /// Replace the task stored at `id`
    async fn update(&self, id: u64, task: &Task) -> Result<Task>;

    /// Delete a task by ID
    async fn delete(&self, id: u64) -> Result<()>;
}
