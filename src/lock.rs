//! Reads resolved packages from `composer.lock` files.
use log::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::{
    error::{ChangelogsError, Result},
    package::{PackageDescriptor, is_dev_version},
};

#[derive(Debug, Deserialize)]
struct LockSource {
    #[serde(default)]
    url: String,
    #[serde(default)]
    reference: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LockPackage {
    name: String,
    version: String,
    #[serde(default)]
    source: Option<LockSource>,
}

#[derive(Debug, Deserialize)]
struct LockDocument {
    packages: Vec<LockPackage>,
    // older Composer versions write `"packages-dev": null`
    #[serde(default, rename = "packages-dev")]
    packages_dev: Option<Vec<LockPackage>>,
}

impl From<LockPackage> for PackageDescriptor {
    fn from(pkg: LockPackage) -> Self {
        let (source_url, reference) = match pkg.source {
            Some(source) => (source.url, source.reference),
            None => (String::new(), None),
        };

        // tagged releases are compared by version, only branch checkouts
        // need the commit reference
        let source_reference = if is_dev_version(&pkg.version) {
            reference.filter(|r| !r.is_empty())
        } else {
            None
        };

        Self {
            name: pkg.name,
            pretty_version: pkg.version,
            source_url,
            source_reference,
        }
    }
}

/// The set of packages recorded in a lock file.
#[derive(Debug, Default, Clone)]
pub struct LockFile {
    pub packages: Vec<PackageDescriptor>,
    pub packages_dev: Vec<PackageDescriptor>,
}

impl LockFile {
    /// Parse lock file content. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let doc: LockDocument = serde_json::from_str(content)
            .map_err(|e| ChangelogsError::invalid_lock(origin, e.to_string()))?;

        Ok(Self {
            packages: doc.packages.into_iter().map(Into::into).collect(),
            packages_dev: doc
                .packages_dev
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
        })
    }

    /// Read and parse the lock file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        info!("loading lock file: {}", path.display());
        let content = fs::read_to_string(path)?;
        let lock = Self::parse(&content, path)?;
        debug!(
            "{}: {} packages, {} dev packages",
            path.display(),
            lock.packages.len(),
            lock.packages_dev.len()
        );
        Ok(lock)
    }

    /// All packages in lock order, dev packages last when included.
    pub fn descriptors(&self, include_dev: bool) -> Vec<PackageDescriptor> {
        let mut all = self.packages.clone();
        if include_dev {
            all.extend(self.packages_dev.iter().cloned());
        }
        all
    }
}
