//! Package descriptors compared by the changelog resolver.
use serde::Serialize;

/// One resolved version of a dependency.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    /// Package name (e.g. "doctrine/instantiator")
    pub name: String,
    /// Human-facing version or branch label (e.g. "1.0.5" or "dev-master")
    pub pretty_version: String,
    /// Repository location the package was fetched from. Empty when the
    /// package has no source.
    pub source_url: String,
    /// Commit identifier for checkouts whose version label does not pin a
    /// single point in history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<String>,
}

impl PackageDescriptor {
    pub fn new(
        pretty_version: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            pretty_version: pretty_version.into(),
            source_url: source_url.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_source_reference(
        mut self,
        reference: impl Into<String>,
    ) -> Self {
        self.source_reference = Some(reference.into());
        self
    }

    /// Label used to point at this version in a comparison: the source
    /// reference when present, otherwise the pretty version.
    pub fn compare_label(&self) -> &str {
        self.source_reference
            .as_deref()
            .unwrap_or(&self.pretty_version)
    }
}

/// Whether `version` is a branch checkout rather than a tagged release,
/// following Composer's `dev-` prefix / `-dev` suffix convention.
pub fn is_dev_version(version: &str) -> bool {
    version.starts_with("dev-") || version.ends_with("-dev")
}
