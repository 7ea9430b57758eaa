use serde::Serialize;
use std::fmt;

/// Stable symbolic name of one loadable override (e.g., `Json`).
///
/// The host resolves the name to an implementation; the registry never
/// interprets it beyond equality.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtensionId(pub &'static str);

/// Name of an optional dependency group (e.g., `gson`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
pub struct GroupId(pub &'static str);

impl ExtensionId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl GroupId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// File-name pattern for one artifact a dependency group needs.
///
/// Artifacts are matched on the file name only: `prefix` must open it and
/// `suffix` must close it, so `gson` / `.jar` accepts `gson-2.8.6.jar`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArtifactPattern {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl ArtifactPattern {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// True when `file_name` is an instance of this artifact.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.len() >= self.prefix.len() + self.suffix.len()
            && file_name.starts_with(self.prefix)
            && file_name.ends_with(self.suffix)
    }
}

impl fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}", self.prefix, self.suffix)
    }
}

/// Cluster of overrides that share one external prerequisite.
///
/// Groups only exist as definition-time descriptors referenced from an
/// extension table; they carry no runtime state. `description` and `remedy`
/// feed the operator notice emitted when the group cannot be resolved.
#[derive(Debug)]
pub struct DependencyGroup {
    pub id: GroupId,
    pub artifacts: &'static [ArtifactPattern],
    pub description: &'static str,
    pub remedy: &'static str,
}

impl PartialEq for DependencyGroup {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DependencyGroup {}

/// One row of an extension table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Extension {
    pub id: ExtensionId,
    pub requires: Option<&'static DependencyGroup>,
}

impl Extension {
    /// An override with no optional prerequisite.
    pub const fn always(name: &'static str) -> Self {
        Self {
            id: ExtensionId(name),
            requires: None,
        }
    }

    /// An override that is only offered when `group` resolves.
    pub const fn requiring(name: &'static str, group: &'static DependencyGroup) -> Self {
        Self {
            id: ExtensionId(name),
            requires: Some(group),
        }
    }
}
