//! Tests executing the whole schema against a [``MemoryStore``]
use std::sync::Arc;

use async_graphql::{Request, Response, Value};
use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey};
use uuid::Uuid;

use crate::{
    auth::{
        token::{TokenIssuer, TokenVerifier},
        Identity,
    },
    graphql::{build_schema, GraphQLSchema},
    store::{MemoryStore, Storage},
};


const SECRET: &[u8] = b"schema test secret";

struct Harness {
    schema: GraphQLSchema,
}

impl Harness {
    fn new() -> Self {
        let store: Storage = Arc::new(MemoryStore::new());
        let issuer = TokenIssuer::new(EncodingKey::from_secret(SECRET), Duration::hours(4));
        Self {
            schema: build_schema(store, issuer),
        }
    }

    /// A caller that is not registered. Good enough for everything except
    /// ``autenticarUsuario`` and avoids hashing passwords in every test.
    fn caller(name: &str) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
        }
    }

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(DecodingKey::from_secret(SECRET))
    }

    async fn execute(&self, query: &str, caller: Option<&Identity>) -> Response {
        let mut request = Request::new(query);
        if let Some(caller) = caller {
            request = request.data(caller.clone());
        }
        self.schema.execute(request).await
    }

    /// Execute and expect no errors
    async fn ok(&self, query: &str, caller: &Identity) -> serde_json::Value {
        let response = self.execute(query, Some(caller)).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    /// Creates a project and returns its id
    async fn project(&self, name: &str, caller: &Identity) -> String {
        let data = self
            .ok(
                &format!(r#"mutation {{ nuevoProyecto(input: {{ nombre: "{}" }}) {{ id }} }}"#, name),
                caller,
            )
            .await;
        data["nuevoProyecto"]["id"].as_str().unwrap().to_string()
    }

    /// Creates a task and returns its id
    async fn task(&self, name: &str, project: &str, caller: &Identity) -> String {
        let data = self
            .ok(
                &format!(
                    r#"mutation {{ nuevaTarea(input: {{ nombre: "{}", proyecto: "{}" }}) {{ id }} }}"#,
                    name, project
                ),
                caller,
            )
            .await;
        data["nuevaTarea"]["id"].as_str().unwrap().to_string()
    }
}

/// The message and ``code`` extension of the single error in ``response``
fn error(response: &Response) -> (String, Value) {
    assert_eq!(response.errors.len(), 1, "errors: {:?}", response.errors);
    let error = &response.errors[0];
    let code = error
        .extensions
        .as_ref()
        .and_then(|e| e.get("code"))
        .cloned()
        .unwrap_or(Value::Null);
    (error.message.clone(), code)
}
