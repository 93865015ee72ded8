//! Derives GitHub "Comparing changes" links for packages changed by a
//! Composer update, so their changelogs are one click away.
pub mod changelog;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod lock;
pub mod operation;
pub mod package;
pub mod report;

pub use changelog::resolve;
pub use error::{ChangelogError, ChangelogsError, Result};
pub use package::PackageDescriptor;
