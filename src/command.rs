//! Executes CLI subcommands: the event source feeding the resolver.
use log::*;
use std::{io::Write, path::Path};

use crate::{
    cli::Command,
    config::Config,
    error::Result,
    lock::LockFile,
    operation::{self, Operation},
    package::PackageDescriptor,
    report::Reporter,
};

/// Run `command` with `config`, writing results to `out`.
pub fn execute<W: Write>(
    command: Command,
    config: &Config,
    out: W,
) -> Result<()> {
    let mut reporter = Reporter::new(out, config);

    match command {
        Command::Diff {
            from,
            to,
            no_dev,
            json,
        } => {
            let include_dev = config.include_dev && !no_dev;
            let operations = diff_locks(&from, &to, include_dev)?;

            let count = if json {
                reporter.report_json(&operations)?
            } else {
                reporter.report_batch(&operations)?
            };

            info!("reported {count} updated packages");
            Ok(())
        }
        Command::Compare {
            from_url,
            to_url,
            from_version,
            to_version,
            from_ref,
            to_ref,
        } => {
            let to_url = to_url.unwrap_or_else(|| from_url.clone());
            let initial = descriptor(from_version, from_url, from_ref);
            let target = descriptor(to_version, to_url, to_ref);
            reporter.report_update(&initial, &target)
        }
    }
}

/// Load both lock files and plan the operations between them.
pub fn diff_locks(
    from: &Path,
    to: &Path,
    include_dev: bool,
) -> Result<Vec<Operation>> {
    let initial = LockFile::load(from)?.descriptors(include_dev);
    let target = LockFile::load(to)?.descriptors(include_dev);

    let operations = operation::plan(&initial, &target);
    debug!("planned {} operations", operations.len());

    Ok(operations)
}

fn descriptor(
    version: String,
    url: String,
    reference: Option<String>,
) -> PackageDescriptor {
    let pkg = PackageDescriptor::new(version, url);
    match reference {
        Some(reference) => pkg.with_source_reference(reference),
        None => pkg,
    }
}
