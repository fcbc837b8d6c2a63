//! User
//!
//! Users register with an email and a password and authenticate to get a token.
//! They are never updated or deleted.
use chrono::{DateTime, Utc};
use log::info;
use uuid::Uuid;

use crate::{
    auth::{password, Identity},
    fallible::{Error, Result},
    store::Store,
};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// unique among all users
    pub email: String,
    /// argon2 PHC string
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// A user that is not stored yet. ``password`` is already hashed.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Register a new user
    ///
    /// Fails with [``Error::UserExists``] if the email is taken.
    pub async fn register(
        name: &str,
        email: &str,
        password: &str,
        store: &dyn Store,
    ) -> Result<Self> {
        let email = email.trim();
        if store.user_by_email(email).await?.is_some() {
            return Err(Error::UserExists);
        }

        let user = store
            .insert_user(NewUser {
                name: name.trim().to_string(),
                email: email.to_string(),
                password: password::hash(password)?,
            })
            .await?;
        info!("Registered new user `{}` with ID `{}`", user.email, user.id);
        Ok(user)
    }

    /// Check the credentials of a user
    pub async fn authenticate(email: &str, password: &str, store: &dyn Store) -> Result<Self> {
        let user = store
            .user_by_email(email.trim())
            .await?
            .ok_or(Error::UnknownUser)?;

        if !password::verify(password, &user.password)? {
            return Err(Error::IncorrectPassword);
        }
        Ok(user)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Identity {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
