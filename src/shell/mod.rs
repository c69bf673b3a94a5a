// Composition root for the diary feed.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the in-memory backend and seed its accounts.
// - Wire the backend into use case handlers and expose them over HTTP and GraphQL.
// - Own the clock ticker for the lifetime of the server.

pub mod config;
pub mod graphql;
pub mod http;
pub mod session;
pub mod state;
