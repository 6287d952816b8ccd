use std::env;

use async_graphql::{EmptySubscription, Schema};

use super::{MutationRoot, QueryRoot};
use crate::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the GraphQL schema and inject shared state (AppState) into the context.
pub fn build_schema(state: AppState) -> AppSchema {
    // Introspection stays on for this demo dataset; GQL_INTROSPECTION=false
    // turns it off.
    let introspection_enabled = env::var("GQL_INTROSPECTION")
        .map(|v| v != "false")
        .unwrap_or(true);

    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(state);

    if !introspection_enabled {
        builder = builder.disable_introspection();
    }

    builder.finish()
}
