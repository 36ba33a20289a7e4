pub mod client;
pub mod error;
pub mod graphql_types;
pub mod project;
pub mod transport;

pub use client::{GraphQLClient, GraphQLQuerier};
pub use error::GraphQLError;
pub use project::{get_pr_items, get_pr_project_items};
pub use transport::{GraphQLTransport, HttpTransport};
