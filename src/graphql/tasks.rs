use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::{
    auth::Identity,
    fallible::{IntoGraphQL, Resource},
    models::{parse_id, Task, TaskChanges, TaskState},
    store::Storage,
};

#[derive(InputObject)]
#[graphql(name = "TareaInput")]
pub struct TaskInput {
    #[graphql(name = "nombre")]
    pub name: String,
    /// The id of the project the task belongs to
    #[graphql(name = "proyecto")]
    pub project: ID,
    /// Defaults to ``PENDING`` on creation. Ignored by ``actualizarTarea``
    /// which takes the state as a separate argument.
    #[graphql(name = "estado")]
    pub state: Option<TaskState>,
}

#[derive(InputObject)]
#[graphql(name = "ProyectoIDInput")]
pub struct ProjectIdInput {
    #[graphql(name = "proyecto")]
    pub project: ID,
}

#[derive(Default)]
pub struct TaskQuery;

#[Object]
impl TaskQuery {
    /// The caller's tasks in a project
    #[graphql(name = "obtenerTareas")]
    async fn tasks(&self, ctx: &Context<'_>, input: ProjectIdInput) -> Result<Vec<Task>> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let project = parse_id(&input.project, Resource::Project).into_graphql()?;
        Task::in_project(project, caller, store.as_ref())
            .await
            .into_graphql()
    }
}

#[derive(Default)]
pub struct TaskMutation;

#[Object]
impl TaskMutation {
    /// Create a task in an existing project. The caller becomes its creator.
    #[graphql(name = "nuevaTarea")]
    async fn create_task(&self, ctx: &Context<'_>, input: TaskInput) -> Result<Task> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let project = parse_id(&input.project, Resource::Project).into_graphql()?;
        Task::create(&input.name, project, input.state, caller, store.as_ref())
            .await
            .into_graphql()
    }

    /// Update a task. ``estado`` replaces the state, leaving it out keeps the current one.
    #[graphql(name = "actualizarTarea")]
    async fn update_task(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: TaskInput,
        #[graphql(name = "estado")] state: Option<TaskState>,
    ) -> Result<Task> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let id = parse_id(&id, Resource::Task).into_graphql()?;
        let changes = TaskChanges {
            name: input.name,
            project: parse_id(&input.project, Resource::Project).into_graphql()?,
            state: input.state,
        };
        Task::update(id, changes, state, caller, store.as_ref())
            .await
            .into_graphql()
    }

    /// Delete a task. Returns a confirmation message.
    #[graphql(name = "eliminarTarea")]
    async fn delete_task(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let id = parse_id(&id, Resource::Task).into_graphql()?;
        Task::delete(id, caller, store.as_ref())
            .await
            .into_graphql()?;
        Ok("task deleted".to_string())
    }
}
