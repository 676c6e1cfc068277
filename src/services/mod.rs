//! Endpoint namespaces for the GitHub REST API v3.
//!
//! Each service is a thin borrow of the client: methods build a path plus an
//! options map and delegate to the request executor's verb methods.

mod authorizations;
mod commits;
mod contents;
mod downloads;
mod gists;
mod issues;
mod labels;
mod markdown;
mod meta;
mod milestones;
mod notifications;
mod objects;
mod organizations;
mod pull_requests;
mod refs;
mod repositories;
mod users;

pub use authorizations::Authorizations;
pub use commits::Commits;
pub use contents::Contents;
pub use downloads::Downloads;
pub use gists::Gists;
pub use issues::Issues;
pub use labels::Labels;
pub use markdown::Markdown;
pub use meta::Meta;
pub use milestones::Milestones;
pub use notifications::Notifications;
pub use objects::Objects;
pub use organizations::Organizations;
pub use pull_requests::PullRequests;
pub use refs::Refs;
pub use repositories::Repositories;
pub use users::Users;
