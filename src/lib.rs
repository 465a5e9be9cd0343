//! Render a GitHub account's repositories as an HTML list.
//!
//! [`github::GitHubClient`] fetches the records, [`render`] turns them into
//! [`dom::Element`] list entries, and [`pipeline::RepoListRenderer`] appends
//! them to a container handed in by the caller.

pub mod dom;
pub mod error;
pub mod github;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod types;
