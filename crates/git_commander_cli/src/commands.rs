//! Command handlers for the GitCommander menu.
//!
//! Each handler takes its collaborators (hosting client, version control,
//! prompt closures) as arguments so tests can drive the full sequencing
//! without a terminal, the network, or the filesystem:
//!
//! - `clone_cmd`: clone every repository of the authenticated user
//! - `delete_cmd`: delete every repository, behind a confirmation gate
//! - `migrate_cmd`: migrate a repository with rewritten author history

pub mod clone_cmd;
pub mod delete_cmd;
pub mod migrate_cmd;
