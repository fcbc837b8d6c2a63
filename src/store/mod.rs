//! Persistence
//!
//! Resolvers only talk to the [``Store``] trait. Every write that needs an
//! ownership check takes the caller's id and only touches rows the caller
//! created, so the check and the write happen in a single statement.
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    fallible::Result,
    models::{NewTask, NewUser, Project, Task, TaskChanges, User},
};

#[cfg(test)]
mod memory;
mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// The handle resolvers get from the schema's data
pub type Storage = Arc<dyn Store>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn user_by_email(&self, email: &str) -> Result<Option<User>>;
    /// Fails with [``crate::fallible::Error::UserExists``] if the email is taken
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    async fn projects_by_creator(&self, creator: Uuid) -> Result<Vec<Project>>;
    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>>;
    async fn insert_project(&self, name: &str, creator: Uuid) -> Result<Project>;
    /// Returns ``None`` if there is no project ``id`` created by ``creator``
    async fn update_project(&self, id: Uuid, creator: Uuid, name: &str)
        -> Result<Option<Project>>;
    /// Returns ``false`` if there is no project ``id`` created by ``creator``
    async fn delete_project(&self, id: Uuid, creator: Uuid) -> Result<bool>;

    async fn tasks_by_project(&self, project: Uuid, creator: Uuid) -> Result<Vec<Task>>;
    async fn task_by_id(&self, id: Uuid) -> Result<Option<Task>>;
    /// Fails with [``crate::fallible::Error::NotFound``] if the project does not exist
    async fn insert_task(&self, task: NewTask) -> Result<Task>;
    /// Returns ``None`` if there is no task ``id`` created by ``creator``
    async fn update_task(&self, id: Uuid, creator: Uuid, changes: TaskChanges)
        -> Result<Option<Task>>;
    /// Returns ``false`` if there is no task ``id`` created by ``creator``
    async fn delete_task(&self, id: Uuid, creator: Uuid) -> Result<bool>;
}
