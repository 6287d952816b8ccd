use api::gql::AppSchema;
use api::AppState;
use async_graphql::{Request, Variables};
use infra::Store;

/// Fresh seeded state per test. Nothing is shared between tests, so they
/// can run in parallel.
pub fn setup_test_state() -> AppState {
    AppState::new(Store::seeded())
}

/// Helper function to execute GraphQL queries and mutations
pub async fn execute_graphql(
    schema: &AppSchema,
    query: &str,
    variables: Option<Variables>,
) -> async_graphql::Response {
    let mut request = Request::new(query);

    if let Some(vars) = variables {
        request = request.variables(vars);
    }

    schema.execute(request).await
}
