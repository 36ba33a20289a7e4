/// Environment snapshot of the current CI run
pub mod config;

/// Output formatting utilities for Markdown representations
pub mod formatter;

/// GitHub REST and GraphQL clients
pub mod github;

/// Reading the workflow's triggering event
pub mod services;

/// Core type definitions and domain models used throughout the library
pub mod types;
