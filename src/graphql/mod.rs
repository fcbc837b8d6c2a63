use async_graphql::{extensions::ApolloTracing, EmptySubscription, MergedObject, Schema};

mod projects;
mod tasks;

use crate::{auth::authentication::AuthenticationMutation, auth::token::TokenIssuer, store::Storage};
use projects::{ProjectMutation, ProjectQuery};
use tasks::{TaskMutation, TaskQuery};

pub type GraphQLSchema = Schema<Queries, Mutations, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct Queries(ProjectQuery, TaskQuery);

#[derive(MergedObject, Default)]
pub struct Mutations(AuthenticationMutation, ProjectMutation, TaskMutation);

/// Build the schema with everything the resolvers need in its data
pub fn build_schema(store: Storage, issuer: TokenIssuer) -> GraphQLSchema {
    GraphQLSchema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .extension(ApolloTracing)
        .data(store)
        .data(issuer)
        .finish()
}
