//! Auth*entication* mutations
//!
//! ``crearUsuario`` registers a user and ``autenticarUsuario`` trades the
//! credentials of a user for a [``Token``].
use async_graphql::{Context, InputObject, Object, Result};

use super::{
    token::{Token, TokenIssuer},
    Identity,
};
use crate::{
    fallible::{Error, IntoGraphQL},
    models::User,
    store::Storage,
};

#[derive(InputObject)]
#[graphql(name = "UsuarioInput")]
pub struct SignupUserInput {
    #[graphql(name = "nombre")]
    pub name: String,
    /// Has to be unique among all users
    pub email: String,
    pub password: String,
}

#[derive(InputObject)]
#[graphql(name = "AutenticarInput")]
pub struct CredentialsInput {
    pub email: String,
    pub password: String,
}

#[derive(Default)]
pub struct AuthenticationMutation;

#[Object]
impl AuthenticationMutation {
    /// Register a new user. Returns a confirmation message.
    #[graphql(name = "crearUsuario")]
    async fn signup(&self, ctx: &Context<'_>, input: SignupUserInput) -> Result<String> {
        let store = ctx.data::<Storage>()?;
        User::register(&input.name, &input.email, &input.password, store.as_ref())
            .await
            .into_graphql()?;
        Ok("user created successfully".to_string())
    }

    /// Returns a token valid for the configured time (4 hours by default)
    #[graphql(name = "autenticarUsuario")]
    async fn authenticate(&self, ctx: &Context<'_>, input: CredentialsInput) -> Result<Token> {
        let store = ctx.data::<Storage>()?;
        let issuer = ctx.data::<TokenIssuer>()?;
        let user = User::authenticate(&input.email, &input.password, store.as_ref())
            .await
            .into_graphql()?;
        issuer
            .issue(&Identity::from(&user))
            .map_err(Error::from)
            .into_graphql()
    }
}
