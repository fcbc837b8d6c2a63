use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::Store;
use crate::{
    fallible::{Error, Resource, Result},
    models::{NewTask, NewUser, Project, Task, TaskChanges, User},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
}

/// A [``Store``] that keeps everything in memory. Mirrors the constraints of the
/// postgres schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(Error::UserExists);
        }
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password: user.password,
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn projects_by_creator(&self, creator: Uuid) -> Result<Vec<Project>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .projects
            .iter()
            .filter(|p| p.creator == creator)
            .cloned()
            .collect())
    }

    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_project(&self, name: &str, creator: Uuid) -> Result<Project> {
        let project = Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            creator,
            created_at: Utc::now(),
        };
        self.tables.lock().unwrap().projects.push(project.clone());
        Ok(project)
    }

    async fn update_project(
        &self,
        id: Uuid,
        creator: Uuid,
        name: &str,
    ) -> Result<Option<Project>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .projects
            .iter_mut()
            .find(|p| p.id == id && p.creator == creator)
            .map(|p| {
                p.name = name.to_string();
                p.clone()
            }))
    }

    async fn delete_project(&self, id: Uuid, creator: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.projects.len();
        tables
            .projects
            .retain(|p| !(p.id == id && p.creator == creator));
        if tables.projects.len() == before {
            return Ok(false);
        }
        tables.tasks.retain(|t| t.project != id);
        Ok(true)
    }

    async fn tasks_by_project(&self, project: Uuid, creator: Uuid) -> Result<Vec<Task>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .tasks
            .iter()
            .filter(|t| t.project == project && t.creator == creator)
            .cloned()
            .collect())
    }

    async fn task_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.projects.iter().any(|p| p.id == task.project) {
            return Err(Error::NotFound(Resource::Project));
        }
        let task = Task {
            id: Uuid::new_v4(),
            name: task.name,
            state: task.state,
            project: task.project,
            creator: task.creator,
            created_at: Utc::now(),
        };
        tables.tasks.push(task.clone());
        Ok(task)
    }

    async fn update_task(
        &self,
        id: Uuid,
        creator: Uuid,
        changes: TaskChanges,
    ) -> Result<Option<Task>> {
        let mut tables = self.tables.lock().unwrap();
        let owned = tables
            .tasks
            .iter()
            .any(|t| t.id == id && t.creator == creator);
        if owned && !tables.projects.iter().any(|p| p.id == changes.project) {
            return Err(Error::NotFound(Resource::Project));
        }
        Ok(tables
            .tasks
            .iter_mut()
            .find(|t| t.id == id && t.creator == creator)
            .map(|t| {
                t.name = changes.name;
                t.project = changes.project;
                if let Some(state) = changes.state {
                    t.state = state;
                }
                t.clone()
            }))
    }

    async fn delete_task(&self, id: Uuid, creator: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.tasks.len();
        tables.tasks.retain(|t| !(t.id == id && t.creator == creator));
        Ok(tables.tasks.len() != before)
    }
}
