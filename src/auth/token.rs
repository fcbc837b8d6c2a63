use async_graphql::SimpleObject;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identity;

lazy_static! {
    static ref VALIDATION: Validation = Validation::new(Algorithm::HS256);
}

#[derive(Debug, Serialize, Deserialize)]
/// Claims
///
/// The fields of the JWT handed out by ``autenticarUsuario``
pub struct Claims {
    /// the user the token belongs to
    id: Uuid,
    email: String,
    name: String,
    /// issued at unix timestamp
    iat: i64,
    /// expires at unix timestamp
    exp: i64,
}

#[derive(SimpleObject, Debug)]
/// Token
///
/// Send ``token`` in the [``Authorization`` header][1] as
/// ``Authorization: Bearer <token>`` to authenticate.
///
/// [1]: https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Authorization
pub struct Token {
    pub token: String,
}

/// Signs tokens for authenticated users
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(key: EncodingKey, ttl: Duration) -> Self {
        Self { key, ttl }
    }

    /// Issue a token for ``identity`` which expires after the configured ttl
    pub fn issue(&self, identity: &Identity) -> Result<Token, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            id: identity.id,
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;
        Ok(Token { token })
    }
}

/// Checks the signature and expiry of tokens
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
}

impl TokenVerifier {
    pub fn new(key: DecodingKey) -> Self {
        Self { key }
    }

    pub fn verify(&self, token: &str) -> Result<Identity, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.key, &VALIDATION)?;
        Ok(Identity {
            id: data.claims.id,
            email: data.claims.email,
            name: data.claims.name,
        })
    }
}
