//! Core workflows for GitCommander.
//!
//! This crate contains everything below the interactive surface: the
//! operator [`Session`], the [`RepositoryHost`] and [`VersionControl`]
//! capability interfaces, the process-backed [`GitCommandLine`]
//! implementation, and the three workflows the CLI exposes:
//!
//! - [`clone_all`] - clone every repository of the authenticated user,
//! - [`delete_all`] - delete every repository of the authenticated user,
//! - [`migrate_repository`] - clone a source repository, rewrite its author
//!   history, and push it into a newly created repository.
//!
//! Execution is strictly sequential: every network call and subprocess is
//! awaited to completion before the next step runs, and nothing is retried.

pub mod bulk;
pub mod errors;
pub mod git;
pub mod host;
pub mod migration;
pub mod request;
pub mod session;
pub mod vcs;

pub use bulk::{clone_all, delete_all, BulkFailure, BulkOutcome};
pub use errors::{Error, ValidationError};
pub use git::GitCommandLine;
pub use host::RepositoryHost;
pub use migration::{migrate_repository, MigrationOutcome};
pub use request::MigrationRequest;
pub use session::{AccessToken, Session};
pub use vcs::VersionControl;
