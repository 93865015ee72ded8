//! Derives GitHub "Comparing changes" links between two package versions.
use regex::Regex;
use std::sync::LazyLock;

use crate::{error::ChangelogError, package::PackageDescriptor};

/// Matches GitHub clone URLs of the form https://github.com/owner/repo.git
static GITHUB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/[^/]+/[^/]+\.git$").unwrap()
});

/// Returns the GitHub compare URL between `initial` and `target`.
///
/// Both packages must share the exact same source URL and that URL must be
/// a GitHub clone URL ending in `.git`. Each side is labeled by its source
/// reference when one is present, otherwise by its pretty version.
///
/// Example:
///   source_url: https://github.com/sonata-project/SonataCoreBundle.git
///   pretty versions: 2.2 and master
///   result: https://github.com/sonata-project/SonataCoreBundle/compare/2.2...master
pub fn resolve(
    initial: &PackageDescriptor,
    target: &PackageDescriptor,
) -> Result<String, ChangelogError> {
    if initial.source_url != target.source_url {
        return Err(ChangelogError::source_mismatch(
            &initial.source_url,
            &target.source_url,
        ));
    }

    if !GITHUB_URL_REGEX.is_match(&initial.source_url) {
        return Err(ChangelogError::unsupported_host(&initial.source_url));
    }

    // the regex guarantees the suffix, so this never falls through
    let repo_url = target
        .source_url
        .strip_suffix(".git")
        .unwrap_or(&target.source_url);

    Ok(format!(
        "{}/compare/{}...{}",
        repo_url,
        initial.compare_label(),
        target.compare_label()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANTIATOR_URL: &str =
        "https://github.com/doctrine/instantiator.git";

    #[test]
    fn builds_compare_url_from_pretty_versions() {
        let initial = PackageDescriptor::new("1.0.4", INSTANTIATOR_URL)
            .with_name("doctrine/instantiator");
        let target = PackageDescriptor::new("1.0.5", INSTANTIATOR_URL)
            .with_name("doctrine/instantiator");

        assert_eq!(
            resolve(&initial, &target).unwrap(),
            "https://github.com/doctrine/instantiator/compare/1.0.4...1.0.5"
        );
    }

    #[test]
    fn accepts_plain_http_scheme() {
        let url = "http://github.com/sonata-project/SonataCoreBundle.git";
        let initial = PackageDescriptor::new("2.2", url);
        let target = PackageDescriptor::new("master", url);

        assert_eq!(
            resolve(&initial, &target).unwrap(),
            "http://github.com/sonata-project/SonataCoreBundle/compare/2.2...master"
        );
    }

    #[test]
    fn source_references_take_precedence() {
        let initial = PackageDescriptor::new("dev-master", INSTANTIATOR_URL)
            .with_source_reference("2a86bb6c1e0a36ea4e4e1f6a8d23d0c1b1b5c5f1");
        let target = PackageDescriptor::new("dev-master", INSTANTIATOR_URL)
            .with_source_reference("d4335782e8ab9ba4a3ecbaa0d4e8d3eac4be3b04");

        assert_eq!(
            resolve(&initial, &target).unwrap(),
            "https://github.com/doctrine/instantiator/compare/2a86bb6c1e0a36ea4e4e1f6a8d23d0c1b1b5c5f1...d4335782e8ab9ba4a3ecbaa0d4e8d3eac4be3b04"
        );
    }

    #[test]
    fn reference_is_used_per_side() {
        let initial = PackageDescriptor::new("1.0.4", INSTANTIATOR_URL);
        let target = PackageDescriptor::new("dev-master", INSTANTIATOR_URL)
            .with_source_reference("d433578");

        assert_eq!(
            resolve(&initial, &target).unwrap(),
            "https://github.com/doctrine/instantiator/compare/1.0.4...d433578"
        );
    }

    #[test]
    fn rejects_non_github_hosts() {
        for url in [
            "https://hubgit.com/doctrine/instantiator.git",
            "https://localhost/doctrine/instantiator.git",
            "https://gitlab.com/doctrine/instantiator.git",
            "git@github.com:doctrine/instantiator.git",
            "",
        ] {
            let initial = PackageDescriptor::new("1.0.4", url);
            let target = PackageDescriptor::new("1.0.5", url);

            let err = resolve(&initial, &target).unwrap_err();

            assert_eq!(err, ChangelogError::unsupported_host(url));
            assert!(err.to_string().contains(url));
        }
    }

    #[test]
    fn rejects_urls_without_git_suffix() {
        let url = "https://github.com/doctrine/instantiator";
        let initial = PackageDescriptor::new("1.0.4", url);
        let target = PackageDescriptor::new("1.0.5", url);

        assert!(matches!(
            resolve(&initial, &target),
            Err(ChangelogError::UnsupportedHost { .. })
        ));
    }

    #[test]
    fn rejects_trailing_newline_after_git_suffix() {
        let url = "https://github.com/a/b.git\n";
        let initial = PackageDescriptor::new("1.0.4", url);
        let target = PackageDescriptor::new("1.0.5", url);

        assert_eq!(
            resolve(&initial, &target),
            Err(ChangelogError::unsupported_host(url))
        );
    }

    #[test]
    fn rejects_nested_repository_paths() {
        let url = "https://github.com/doctrine/nested/instantiator.git";
        let initial = PackageDescriptor::new("1.0.4", url);
        let target = PackageDescriptor::new("1.0.5", url);

        assert!(matches!(
            resolve(&initial, &target),
            Err(ChangelogError::UnsupportedHost { .. })
        ));
    }

    #[test]
    fn mismatched_sources_report_both_urls() {
        let initial_url = "https://github.com/doctrine/instantiator.git";
        let target_url = "https://github.com/doctrine-fork/instantiator.git";
        let initial = PackageDescriptor::new("1.0.4", initial_url);
        let target = PackageDescriptor::new("1.0.5", target_url);

        let err = resolve(&initial, &target).unwrap_err();

        assert_eq!(
            err,
            ChangelogError::source_mismatch(initial_url, target_url)
        );
        assert!(err.to_string().contains(initial_url));
        assert!(err.to_string().contains(target_url));
    }

    #[test]
    fn mismatch_is_checked_before_host() {
        let initial = PackageDescriptor::new("1.0.4", "https://localhost/a.git");
        let target = PackageDescriptor::new("1.0.5", "https://hubgit.com/a.git");

        assert!(matches!(
            resolve(&initial, &target),
            Err(ChangelogError::SourceMismatch { .. })
        ));
    }

    #[test]
    fn resolving_twice_yields_same_result() {
        let initial = PackageDescriptor::new("1.0.4", INSTANTIATOR_URL);
        let target = PackageDescriptor::new("1.0.5", INSTANTIATOR_URL);

        assert_eq!(resolve(&initial, &target), resolve(&initial, &target));
        assert_eq!(initial, PackageDescriptor::new("1.0.4", INSTANTIATOR_URL));
    }
}
