//! Writes changelog links for update operations to an output sink.
use log::*;
use serde::Serialize;
use std::io::Write;

use crate::{
    changelog, config::Config, error::Result, operation::Operation,
    package::PackageDescriptor,
};

/// JSON representation of one update and its changelog outcome
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChangelogEntry {
    fn new(initial: &PackageDescriptor, target: &PackageDescriptor) -> Self {
        let (changelog, error) = match changelog::resolve(initial, target) {
            Ok(url) => (Some(url), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            name: target.name.clone(),
            from: initial.pretty_version.clone(),
            to: target.pretty_version.clone(),
            changelog,
            error,
        }
    }
}

/// Line oriented changelog output.
pub struct Reporter<W: Write> {
    out: W,
    pad: String,
    heading: String,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: &Config) -> Self {
        Self {
            out,
            pad: config.pad(),
            heading: config.heading.clone(),
        }
    }

    /// Writes the changelog for every update in `operations` under the
    /// batch heading. Installs and uninstalls are skipped. Writes nothing
    /// when there are no updates.
    pub fn report_batch(&mut self, operations: &[Operation]) -> Result<usize> {
        let updates: Vec<_> =
            operations.iter().filter_map(Operation::as_update).collect();

        if updates.is_empty() {
            info!("no updated packages found");
            return Ok(0);
        }

        writeln!(self.out, "{}", self.heading)?;

        for (initial, target) in updates.iter() {
            self.report_update(initial, target)?;
        }

        Ok(updates.len())
    }

    /// Writes a single changelog line for one update.
    pub fn report_update(
        &mut self,
        initial: &PackageDescriptor,
        target: &PackageDescriptor,
    ) -> Result<()> {
        let line = match changelog::resolve(initial, target) {
            Ok(url) => {
                debug!("{}: {}", target.name, url);
                url
            }
            Err(err) => {
                warn!("{}: {}", target.name, err);
                err.to_string()
            }
        };

        writeln!(self.out, "{}{}", self.pad, line)?;

        Ok(())
    }

    /// Writes every update in `operations` as a pretty JSON array.
    pub fn report_json(&mut self, operations: &[Operation]) -> Result<usize> {
        let entries: Vec<ChangelogEntry> = operations
            .iter()
            .filter_map(Operation::as_update)
            .map(|(initial, target)| ChangelogEntry::new(initial, target))
            .collect();

        let json = serde_json::to_string_pretty(&entries)?;
        writeln!(self.out, "{json}")?;

        Ok(entries.len())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
