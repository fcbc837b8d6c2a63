//! Errors returned by resolvers
//!
//! Every operation that can fail returns [`Error`]. At the GraphQL boundary it is
//! turned into an [`async_graphql::Error`] with a human readable message and a
//! stable ``code`` in the error's ``extensions`` so clients can match on it
//! without parsing the message.
use std::fmt;

use async_graphql::ErrorExtensions;
use log::warn;
use thiserror::Error;

/// The kind of resource an ownership checked operation acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Project,
    Task,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Resource::Project => "project",
            Resource::Task => "task",
        })
    }
}

/// What the caller tried to do with a [`Resource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Edit => "edit",
            Action::Delete => "delete",
        })
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Another user registered with the same email
    #[error("user already exists")]
    UserExists,
    /// There is no user with the supplied email
    #[error("user does not exist")]
    UnknownUser,
    #[error("incorrect password")]
    IncorrectPassword,
    /// The request carried no (valid) token
    #[error("not authenticated")]
    Unauthenticated,
    #[error("{0} not found")]
    NotFound(Resource),
    /// The resource exists but the caller is not its creator
    #[error("no permission to {action} this {resource}")]
    Forbidden { resource: Resource, action: Action },
    #[error("failed to hash password: {0}")]
    PasswordHash(argon2::password_hash::Error),
    #[error("failed to sign token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Error {
    /// The machine readable code put into the error's ``extensions``
    pub fn code(&self) -> &'static str {
        match self {
            Error::UserExists => "USER_EXISTS",
            Error::UnknownUser => "UNKNOWN_USER",
            Error::IncorrectPassword => "INCORRECT_PASSWORD",
            Error::Unauthenticated => "UNAUTHENTICATED",
            Error::NotFound(_) => "NOT_FOUND",
            Error::Forbidden { .. } => "FORBIDDEN",
            Error::PasswordHash(_) | Error::Token(_) | Error::Database(_) => "INTERNAL",
        }
    }

    fn is_internal(&self) -> bool {
        self.code() == "INTERNAL"
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(e: argon2::password_hash::Error) -> Self {
        Error::PasswordHash(e)
    }
}

impl ErrorExtensions for Error {
    fn extend(&self) -> async_graphql::Error {
        // internal details stay in the server log
        let message = if self.is_internal() {
            warn!("{}", self);
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        let code = self.code();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Extension to turn a ``Result<T, Error>`` into an ``async_graphql::Result<T>``
pub trait IntoGraphQL<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> IntoGraphQL<T> for Result<T> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
