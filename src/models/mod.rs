//! The stored entities and the operations on them
use async_graphql::ID;
use uuid::Uuid;

use crate::fallible::{Action, Error, Resource};

mod project;
mod task;
mod user;

pub use project::Project;
pub use task::{NewTask, Task, TaskChanges, TaskState};
pub use user::{NewUser, User};

/// Parse a GraphQL ``ID``. An id that is not a uuid can't exist, so it is reported as not found.
pub fn parse_id(id: &ID, resource: Resource) -> Result<Uuid, Error> {
    Uuid::parse_str(id.as_str()).map_err(|_| Error::NotFound(resource))
}

/// The error for an ownership checked write that matched no row
fn miss(exists: bool, resource: Resource, action: Action) -> Error {
    if exists {
        Error::Forbidden { resource, action }
    } else {
        Error::NotFound(resource)
    }
}
