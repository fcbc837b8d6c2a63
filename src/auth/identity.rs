use actix_web::{http::header::Header, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use async_graphql::Context;
use log::debug;
use uuid::Uuid;

use super::token::TokenVerifier;
use crate::fallible::{Error, Result};

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl Identity {
    /// Tries to read and verify the bearer token of a request.
    ///
    /// A missing, malformed or expired token yields ``None``. The request is then
    /// handled as unauthenticated.
    pub fn from_request(http_request: &HttpRequest, verifier: &TokenVerifier) -> Option<Self> {
        let auth = Authorization::<Bearer>::parse(http_request).ok()?;
        match verifier.verify(auth.into_scheme().token()) {
            Ok(identity) => Some(identity),
            Err(e) => {
                debug!("Ignoring invalid token: {}", e);
                None
            }
        }
    }

    /// Returns the caller or [``Error::Unauthenticated``]
    pub fn require<'a>(ctx: &Context<'a>) -> Result<&'a Identity> {
        ctx.data_opt::<Identity>().ok_or(Error::Unauthenticated)
    }
}
