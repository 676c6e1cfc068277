//! # GitHub REST API v3 Client
//!
//! A synchronous GitHub API client with:
//! - Endpoint coverage for repositories, contents, issues, pull requests,
//!   gists, organizations, teams, users, commits, git data, labels,
//!   milestones, notifications and OAuth authorizations
//! - Token, basic, and anonymous application authentication
//! - A mutable per-client configuration with documented defaults
//! - Per-call option layering: caller values always win over injected ones
//! - Canned-response fixtures and a pluggable transport for testing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use github_rest::{Client, ConfigurationUpdate, RequestOptions};
//!
//! fn main() -> Result<(), github_rest::GitHubError> {
//!     let client = Client::with_config(
//!         ConfigurationUpdate::new().oauth_token("ghp_xxxxxxxxxxxx"),
//!     )?;
//!
//!     // Fetch the authenticated user.
//!     let user = client.users().get(None, RequestOptions::new())?;
//!     println!("{}", user["login"]);
//!
//!     // List open pull requests.
//!     let pulls = client
//!         .pull_requests()
//!         .list("octocat/Hello-World", "open", RequestOptions::new())?;
//!     println!("{} open pulls", pulls.as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
pub mod config;
pub mod errors;

// Authentication
pub mod auth;

// Request pipeline
pub mod connection;
pub mod options;
pub mod request;
pub mod transport;

// Client entry point
pub mod client;

// API services
pub mod services;

// Re-exports for convenience
pub use client::Client;
pub use config::{Configuration, ConfigurationUpdate};
pub use errors::{GitHubError, GitHubResult, HttpError, HttpErrorKind};
pub use options::RequestOptions;
pub use request::{Request, DEFAULT_MEDIA_TYPE};
pub use transport::{Fixture, PreparedRequest, Transport, WireResponse};
