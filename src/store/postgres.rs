use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::Store;
use crate::{
    fallible::{Error, Resource, Result},
    models::{NewTask, NewUser, Project, Task, TaskChanges, User},
};

const USER_COLUMNS: &str = "id, name, email, password, created_at";
const PROJECT_COLUMNS: &str = "id, name, creator, created_at";
const TASK_COLUMNS: &str = "id, name, state, project, creator, created_at";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Maps constraint violations to the errors the client can act on
fn constraint_error(e: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db) = &e {
        // postgresql error codes: https://www.postgresql.org/docs/current/errcodes-appendix.html
        if db.is_unique_violation() && db.constraint() == Some("users_email_key") {
            return Error::UserExists;
        }
        // tasks_project_fkey is the only foreign key a client controls
        if db.is_foreign_key_violation() && db.constraint() == Some("tasks_project_fkey") {
            return Error::NotFound(Resource::Project);
        }
    }
    Error::Database(e)
}

#[async_trait]
impl Store for PgStore {
    async fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE email = $1", USER_COLUMNS);
        Ok(sqlx::query_as(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let query = format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as(&query)
            .bind(user.name)
            .bind(user.email)
            .bind(user.password)
            .fetch_one(&self.pool)
            .await
            .map_err(constraint_error)
    }

    async fn projects_by_creator(&self, creator: Uuid) -> Result<Vec<Project>> {
        let query = format!(
            "SELECT {} FROM projects WHERE creator = $1 ORDER BY created_at",
            PROJECT_COLUMNS
        );
        Ok(sqlx::query_as(&query)
            .bind(creator)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn project_by_id(&self, id: Uuid) -> Result<Option<Project>> {
        let query = format!("SELECT {} FROM projects WHERE id = $1", PROJECT_COLUMNS);
        Ok(sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_project(&self, name: &str, creator: Uuid) -> Result<Project> {
        let query = format!(
            "INSERT INTO projects (name, creator) VALUES ($1, $2) RETURNING {}",
            PROJECT_COLUMNS
        );
        Ok(sqlx::query_as(&query)
            .bind(name)
            .bind(creator)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update_project(
        &self,
        id: Uuid,
        creator: Uuid,
        name: &str,
    ) -> Result<Option<Project>> {
        let query = format!(
            "UPDATE projects SET name = $3 WHERE id = $1 AND creator = $2 RETURNING {}",
            PROJECT_COLUMNS
        );
        Ok(sqlx::query_as(&query)
            .bind(id)
            .bind(creator)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn delete_project(&self, id: Uuid, creator: Uuid) -> Result<bool> {
        // tasks of the project are removed by ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND creator = $2")
            .bind(id)
            .bind(creator)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn tasks_by_project(&self, project: Uuid, creator: Uuid) -> Result<Vec<Task>> {
        let query = format!(
            "SELECT {} FROM tasks WHERE project = $1 AND creator = $2 ORDER BY created_at",
            TASK_COLUMNS
        );
        Ok(sqlx::query_as(&query)
            .bind(project)
            .bind(creator)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn task_by_id(&self, id: Uuid) -> Result<Option<Task>> {
        let query = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);
        Ok(sqlx::query_as(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task> {
        let query = format!(
            "INSERT INTO tasks (name, state, project, creator) VALUES ($1, $2, $3, $4) RETURNING {}",
            TASK_COLUMNS
        );
        sqlx::query_as(&query)
            .bind(task.name)
            .bind(task.state)
            .bind(task.project)
            .bind(task.creator)
            .fetch_one(&self.pool)
            .await
            .map_err(constraint_error)
    }

    async fn update_task(
        &self,
        id: Uuid,
        creator: Uuid,
        changes: TaskChanges,
    ) -> Result<Option<Task>> {
        let query = format!(
            r#"
            UPDATE tasks SET name = $3, project = $4, state = COALESCE($5, state)
            WHERE id = $1 AND creator = $2
            RETURNING {}
            "#,
            TASK_COLUMNS
        );
        sqlx::query_as(&query)
            .bind(id)
            .bind(creator)
            .bind(changes.name)
            .bind(changes.project)
            .bind(changes.state)
            .fetch_optional(&self.pool)
            .await
            .map_err(constraint_error)
    }

    async fn delete_task(&self, id: Uuid, creator: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND creator = $2")
            .bind(id)
            .bind(creator)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }
}
