pub mod client;
pub mod graphql;

pub use client::RestClient;
pub use graphql::graphql_types;
pub use graphql::{GraphQLClient, GraphQLError, GraphQLQuerier};
