//! Package operations between two resolved package sets.
use log::*;
use std::collections::{HashMap, HashSet};

use crate::package::PackageDescriptor;

/// A change to a single package between an initial and a target set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Install(PackageDescriptor),
    Update {
        initial: PackageDescriptor,
        target: PackageDescriptor,
    },
    Uninstall(PackageDescriptor),
}

impl Operation {
    /// Returns the (initial, target) pair when this operation is an update.
    pub fn as_update(
        &self,
    ) -> Option<(&PackageDescriptor, &PackageDescriptor)> {
        match self {
            Operation::Update { initial, target } => Some((initial, target)),
            _ => None,
        }
    }

    /// Name of the package this operation applies to
    pub fn package_name(&self) -> &str {
        match self {
            Operation::Install(pkg) | Operation::Uninstall(pkg) => &pkg.name,
            Operation::Update { target, .. } => &target.name,
        }
    }
}

/// Computes the operations that turn `initial` into `target`.
///
/// Packages are matched by name. Installs and updates follow the order of
/// `target`, uninstalls follow, in the order of `initial`. Packages whose
/// version and reference are unchanged produce no operation. A name listed
/// more than once in either set only counts its first entry.
pub fn plan(
    initial: &[PackageDescriptor],
    target: &[PackageDescriptor],
) -> Vec<Operation> {
    let mut initial_by_name: HashMap<&str, &PackageDescriptor> =
        HashMap::new();

    for pkg in initial.iter() {
        if initial_by_name.contains_key(pkg.name.as_str()) {
            warn!("duplicate package in initial set, ignoring: {}", pkg.name);
            continue;
        }
        initial_by_name.insert(pkg.name.as_str(), pkg);
    }

    let mut operations = vec![];
    let mut target_names: HashSet<&str> = HashSet::new();

    for pkg in target.iter() {
        if !target_names.insert(pkg.name.as_str()) {
            warn!("duplicate package in target set, ignoring: {}", pkg.name);
            continue;
        }

        match initial_by_name.get(pkg.name.as_str()) {
            None => operations.push(Operation::Install(pkg.clone())),
            Some(previous)
                if previous.pretty_version != pkg.pretty_version
                    || previous.source_reference != pkg.source_reference =>
            {
                operations.push(Operation::Update {
                    initial: (*previous).clone(),
                    target: pkg.clone(),
                })
            }
            Some(_) => {}
        }
    }

    let mut uninstalled: HashSet<&str> = HashSet::new();

    for pkg in initial.iter() {
        if !target_names.contains(pkg.name.as_str())
            && uninstalled.insert(pkg.name.as_str())
        {
            operations.push(Operation::Uninstall(pkg.clone()));
        }
    }

    operations
}
