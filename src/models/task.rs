use async_graphql::{Enum, Object, ID};
use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use super::miss;
use crate::{
    auth::Identity,
    fallible::{Action, Resource, Result},
    store::Store,
};

#[derive(Enum, sqlx::Type, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[graphql(name = "EstadoTarea")]
#[sqlx(type_name = "task_state", rename_all = "snake_case")]
pub enum TaskState {
    #[default]
    Pending,
    InProgress,
    Done,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Task {
    pub id: Uuid,
    pub name: String,
    pub state: TaskState,
    pub project: Uuid,
    /// the user who created the task. Set once on creation
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub state: TaskState,
    pub project: Uuid,
    pub creator: Uuid,
}

/// Fields replaced by an update. ``state: None`` keeps the stored state.
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub name: String,
    pub project: Uuid,
    pub state: Option<TaskState>,
}

impl Task {
    /// The tasks of ``project`` created by ``caller``. Tasks of other users in the
    /// same project are not included.
    pub async fn in_project(project: Uuid, caller: &Identity, store: &dyn Store) -> Result<Vec<Self>> {
        store.tasks_by_project(project, caller.id).await
    }

    pub async fn create(
        name: &str,
        project: Uuid,
        state: Option<TaskState>,
        caller: &Identity,
        store: &dyn Store,
    ) -> Result<Self> {
        let task = store
            .insert_task(NewTask {
                name: name.trim().to_string(),
                state: state.unwrap_or_default(),
                project,
                creator: caller.id,
            })
            .await?;
        info!(
            "User `{}` created task `{}` in project `{}`",
            caller.id, task.id, task.project
        );
        Ok(task)
    }

    /// Update a task. Only its creator may do that.
    pub async fn update(
        id: Uuid,
        mut changes: TaskChanges,
        state: Option<TaskState>,
        caller: &Identity,
        store: &dyn Store,
    ) -> Result<Self> {
        // the separate state argument wins over the one in the input
        changes.state = state;
        changes.name = changes.name.trim().to_string();

        match store.update_task(id, caller.id, changes).await? {
            Some(task) => Ok(task),
            None => {
                let exists = store.task_by_id(id).await?.is_some();
                Err(miss(exists, Resource::Task, Action::Edit))
            }
        }
    }

    /// Delete a task. Only its creator may do that.
    pub async fn delete(id: Uuid, caller: &Identity, store: &dyn Store) -> Result<()> {
        if store.delete_task(id, caller.id).await? {
            info!("User `{}` deleted task `{}`", caller.id, id);
            return Ok(());
        }
        let exists = store.task_by_id(id).await?.is_some();
        Err(miss(exists, Resource::Task, Action::Delete))
    }
}

#[Object(name = "Tarea")]
impl Task {
    pub async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    #[graphql(name = "nombre")]
    pub async fn name(&self) -> &str {
        &self.name
    }

    #[graphql(name = "estado")]
    pub async fn state(&self) -> TaskState {
        self.state
    }

    /// The id of the project the task belongs to
    #[graphql(name = "proyecto")]
    pub async fn project(&self) -> ID {
        ID(self.project.to_string())
    }

    /// The id of the user who created the task
    #[graphql(name = "creador")]
    pub async fn creator(&self) -> ID {
        ID(self.creator.to_string())
    }

    #[graphql(name = "creado")]
    pub async fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
