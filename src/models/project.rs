use async_graphql::{Object, ID};
use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use super::miss;
use crate::{
    auth::Identity,
    fallible::{Action, Resource, Result},
    store::Store,
};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// the user who created the project. Set once on creation
    pub creator: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// All projects created by ``caller``
    pub async fn created_by(caller: &Identity, store: &dyn Store) -> Result<Vec<Self>> {
        store.projects_by_creator(caller.id).await
    }

    pub async fn create(name: &str, caller: &Identity, store: &dyn Store) -> Result<Self> {
        let project = store.insert_project(name.trim(), caller.id).await?;
        info!("User `{}` created project `{}`", caller.id, project.id);
        Ok(project)
    }

    /// Rename a project. Only its creator may do that.
    pub async fn rename(id: Uuid, name: &str, caller: &Identity, store: &dyn Store) -> Result<Self> {
        match store.update_project(id, caller.id, name.trim()).await? {
            Some(project) => Ok(project),
            None => {
                let exists = store.project_by_id(id).await?.is_some();
                Err(miss(exists, Resource::Project, Action::Edit))
            }
        }
    }

    /// Delete a project and its tasks. Only its creator may do that.
    pub async fn delete(id: Uuid, caller: &Identity, store: &dyn Store) -> Result<()> {
        if store.delete_project(id, caller.id).await? {
            info!("User `{}` deleted project `{}`", caller.id, id);
            return Ok(());
        }
        let exists = store.project_by_id(id).await?.is_some();
        Err(miss(exists, Resource::Project, Action::Delete))
    }
}

#[Object(name = "Proyecto")]
impl Project {
    pub async fn id(&self) -> ID {
        ID(self.id.to_string())
    }

    #[graphql(name = "nombre")]
    pub async fn name(&self) -> &str {
        &self.name
    }

    /// The id of the user who created the project
    #[graphql(name = "creador")]
    pub async fn creator(&self) -> ID {
        ID(self.creator.to_string())
    }

    #[graphql(name = "creado")]
    pub async fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
