use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::{
    auth::Identity,
    fallible::{IntoGraphQL, Resource},
    models::{parse_id, Project},
    store::Storage,
};

#[derive(InputObject)]
#[graphql(name = "ProyectoInput")]
pub struct ProjectInput {
    #[graphql(name = "nombre")]
    pub name: String,
}

#[derive(Default)]
pub struct ProjectQuery;

#[Object]
impl ProjectQuery {
    /// The projects created by the caller
    #[graphql(name = "obtenerProyectos")]
    async fn projects(&self, ctx: &Context<'_>) -> Result<Vec<Project>> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        Project::created_by(caller, store.as_ref()).await.into_graphql()
    }
}

#[derive(Default)]
pub struct ProjectMutation;

#[Object]
impl ProjectMutation {
    /// Create a project. The caller becomes its creator.
    #[graphql(name = "nuevoProyecto")]
    async fn create_project(&self, ctx: &Context<'_>, input: ProjectInput) -> Result<Project> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        Project::create(&input.name, caller, store.as_ref())
            .await
            .into_graphql()
    }

    #[graphql(name = "actualizarProyecto")]
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ProjectInput,
    ) -> Result<Project> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let id = parse_id(&id, Resource::Project).into_graphql()?;
        Project::rename(id, &input.name, caller, store.as_ref())
            .await
            .into_graphql()
    }

    /// Delete a project together with its tasks. Returns a confirmation message.
    #[graphql(name = "eliminarProyecto")]
    async fn delete_project(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        let caller = Identity::require(ctx).into_graphql()?;
        let store = ctx.data::<Storage>()?;
        let id = parse_id(&id, Resource::Project).into_graphql()?;
        Project::delete(id, caller, store.as_ref())
            .await
            .into_graphql()?;
        Ok("project deleted".to_string())
    }
}
