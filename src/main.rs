use std::sync::Arc;

use actix_web::{get, guard, post, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use log::info;
use sqlx::{migrate, PgPool};

use crate::auth::{token::TokenVerifier, Identity};
use crate::config::Config;
use crate::graphql::GraphQLSchema;
use crate::store::{PgStore, Storage};

const GRAPHQL_ENDPOINT: &str = "/graphql";
const GRAPHQL_PLAYGROUND_ENDPOINT: &str = "/playground";

mod auth;
mod config;
mod fallible;
mod graphql;
mod models;
mod store;
#[cfg(test)]
mod tests;

#[post("/graphql")]
async fn execute_graphql(
    schema: web::Data<GraphQLSchema>,
    verifier: web::Data<TokenVerifier>,
    req: GraphQLRequest,
    http_request: HttpRequest,
) -> GraphQLResponse {
    let mut req = req.into_inner();
    if let Some(identity) = Identity::from_request(&http_request, &verifier) {
        req = req.data(identity);
    }
    schema.execute(req).await.into()
}

#[get("/graphql/sdl")]
async fn getsdl(schema: web::Data<GraphQLSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(schema.sdl())
}

async fn playground() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_ENDPOINT).finish()))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = Config::load()?;

    info!("Connecting to the database");
    let db = PgPool::connect(&config.database_url).await?;
    info!("Running database migrations...");
    migrate!("./migrations/").run(&db).await?;

    let store: Storage = Arc::new(PgStore::new(db));
    let schema = graphql::build_schema(store, config.token_issuer());
    let verifier = web::Data::new(config.token_verifier());

    info!("Starting http server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(schema.clone()))
            .app_data(verifier.clone())
            .service(execute_graphql)
            .service(getsdl)
            .service(
                web::resource([GRAPHQL_ENDPOINT, GRAPHQL_PLAYGROUND_ENDPOINT])
                    .guard(guard::Get())
                    .to(playground),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
