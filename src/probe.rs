//! Resolvability probes for optional dependency groups.
//!
//! A probe answers one question per group: can every artifact the group needs
//! be found right now? "No" is an ordinary [`Availability::Unresolved`] value.
//! `Err` is reserved for faults that say nothing about the group (an
//! unreadable directory, a malformed path) and must reach the caller intact.

use crate::config::Config;
use crate::extension::{ArtifactPattern, DependencyGroup, GroupId};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of probing a single dependency group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Availability {
    Resolved,
    Unresolved(MissingDependency),
}

/// Why a group could not be resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MissingDependency {
    pub group: GroupId,
    /// Artifact patterns with no match, e.g. `gson*.jar`.
    pub artifacts: Vec<String>,
    /// Resolution-path entries that were searched.
    pub searched: Vec<PathBuf>,
}

/// Checks whether a dependency group can be resolved in the current
/// environment.
pub trait Probe {
    fn probe(&self, group: &'static DependencyGroup) -> Result<Availability>;
}

impl<F> Probe for F
where
    F: Fn(&'static DependencyGroup) -> Result<Availability>,
{
    fn probe(&self, group: &'static DependencyGroup) -> Result<Availability> {
        self(group)
    }
}

/// Searches an ordered resolution path for group artifacts.
///
/// Entries behave like classpath entries: a file is a candidate itself, a
/// directory contributes the files directly inside it, and `dir/*` is an
/// explicit directory wildcard. Entries that do not exist are skipped.
#[derive(Clone, Debug, Default)]
pub struct PathProbe {
    entries: Vec<PathBuf>,
}

impl PathProbe {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.lib_paths.clone())
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// First file on the path matching `pattern`, if any.
    pub fn locate(&self, pattern: &ArtifactPattern) -> Result<Option<PathBuf>> {
        for entry in &self.entries {
            for candidate in candidates_in(entry)? {
                let matched = candidate
                    .file_name()
                    .is_some_and(|name| pattern.matches(&name.to_string_lossy()));
                if matched {
                    return Ok(Some(candidate));
                }
            }
        }
        Ok(None)
    }
}

impl Probe for PathProbe {
    fn probe(&self, group: &'static DependencyGroup) -> Result<Availability> {
        let mut missing = Vec::new();
        for pattern in group.artifacts {
            match self
                .locate(pattern)
                .with_context(|| format!("probing dependency group '{}'", group.id))?
            {
                Some(found) => debug!(
                    group = %group.id,
                    artifact = %pattern,
                    path = %found.display(),
                    "artifact resolved"
                ),
                None => missing.push(pattern.to_string()),
            }
        }

        if missing.is_empty() {
            return Ok(Availability::Resolved);
        }
        debug!(group = %group.id, missing = ?missing, "dependency group unresolved");
        Ok(Availability::Unresolved(MissingDependency {
            group: group.id,
            artifacts: missing,
            searched: self.entries.clone(),
        }))
    }
}

/// Directory named by a `dir/*` entry; a bare `*` means the working directory.
fn wildcard_dir(entry: &Path) -> Option<&Path> {
    if entry.file_name() != Some(OsStr::new("*")) {
        return None;
    }
    match entry.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Some(dir),
        _ => Some(Path::new(".")),
    }
}

fn candidates_in(entry: &Path) -> Result<Vec<PathBuf>> {
    if let Some(dir) = wildcard_dir(entry) {
        return files_in_dir(dir);
    }

    let meta = match fs::metadata(entry) {
        Ok(meta) => meta,
        Err(err) if is_absent(&err) => return Ok(Vec::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("inspecting {}", entry.display()));
        }
    };
    if meta.is_dir() {
        files_in_dir(entry)
    } else if meta.is_file() {
        Ok(vec![entry.to_path_buf()])
    } else {
        Ok(Vec::new())
    }
}

fn files_in_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let reader = match fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(err) if is_absent(&err) => return Ok(Vec::new()),
        Err(err) => return Err(err).with_context(|| format!("listing {}", dir.display())),
    };

    let mut files = Vec::new();
    for entry in reader {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        // Follows symlinks; a link loop or unreadable target is a fault.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) if is_absent(&err) => {}
            Err(err) => {
                return Err(err).with_context(|| format!("inspecting {}", path.display()));
            }
        }
    }
    // read_dir order is platform-defined; sort so repeated probes agree.
    files.sort();
    Ok(files)
}

fn is_absent(err: &std::io::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::GSON;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn resolves_jar_listed_directly() {
        let dir = TempDir::new().unwrap();
        let jar = dir.path().join("gson-2.8.6.jar");
        touch(&jar);

        let probe = PathProbe::new(vec![jar.clone()]);
        assert_eq!(probe.probe(&GSON).unwrap(), Availability::Resolved);
        assert_eq!(probe.locate(&GSON.artifacts[0]).unwrap(), Some(jar));
    }

    #[test]
    fn resolves_jar_inside_listed_directory() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("commons-csv.jar"));
        touch(&dir.path().join("gson-2.10.jar"));

        let probe = PathProbe::new(vec![dir.path().to_path_buf()]);
        assert_eq!(probe.probe(&GSON).unwrap(), Availability::Resolved);
    }

    #[test]
    fn resolves_through_directory_wildcard() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("gson.jar"));

        let probe = PathProbe::new(vec![dir.path().join("*")]);
        assert_eq!(probe.probe(&GSON).unwrap(), Availability::Resolved);
    }

    #[test]
    fn nested_directories_are_not_searched() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("lib");
        fs::create_dir(&nested).unwrap();
        touch(&nested.join("gson-2.8.6.jar"));

        let probe = PathProbe::new(vec![dir.path().to_path_buf()]);
        assert!(matches!(
            probe.probe(&GSON).unwrap(),
            Availability::Unresolved(_)
        ));
    }

    #[test]
    fn reports_missing_artifacts_and_searched_entries() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("tla2tools.jar"));
        let gone = dir.path().join("does-not-exist");
        let entries = vec![dir.path().to_path_buf(), gone, dir.path().join("nope/*")];

        let probe = PathProbe::new(entries.clone());
        let Availability::Unresolved(missing) = probe.probe(&GSON).unwrap() else {
            panic!("gson should be missing");
        };
        assert_eq!(missing.group, GSON.id);
        assert_eq!(missing.artifacts, vec!["gson*.jar".to_string()]);
        assert_eq!(missing.searched, entries);
    }

    #[test]
    fn empty_path_is_unresolved() {
        let probe = PathProbe::default();
        assert!(matches!(
            probe.probe(&GSON).unwrap(),
            Availability::Unresolved(_)
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn unusable_entry_is_an_error_not_a_miss() {
        let dir = TempDir::new().unwrap();
        let too_long = dir.path().join("x".repeat(300));

        let probe = PathProbe::new(vec![too_long]);
        let err = probe.probe(&GSON).unwrap_err();
        assert!(format!("{err:#}").contains("probing dependency group 'gson'"));
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loop_in_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let link = dir.path().join("gson-2.8.6.jar");
        std::os::unix::fs::symlink(&link, &link).unwrap();

        let probe = PathProbe::new(vec![dir.path().to_path_buf()]);
        let err = probe.probe(&GSON).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("probing dependency group 'gson'"));
        assert!(rendered.contains("inspecting"));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_in_directory_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("removed.jar"),
            dir.path().join("gson-2.8.6.jar"),
        )
        .unwrap();

        let probe = PathProbe::new(vec![dir.path().to_path_buf()]);
        assert!(matches!(
            probe.probe(&GSON).unwrap(),
            Availability::Unresolved(_)
        ));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_jar_names_still_match() {
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        touch(&dir.path().join(OsStr::from_bytes(b"gson-\xff.jar")));

        let probe = PathProbe::new(vec![dir.path().to_path_buf()]);
        assert_eq!(probe.probe(&GSON).unwrap(), Availability::Resolved);
    }

    #[test]
    fn bare_wildcard_means_working_directory() {
        assert_eq!(wildcard_dir(Path::new("*")), Some(Path::new(".")));
        assert_eq!(wildcard_dir(Path::new("lib/*")), Some(Path::new("lib")));
        assert_eq!(wildcard_dir(Path::new("lib")), None);
        assert_eq!(wildcard_dir(Path::new("lib/gson*.jar")), None);
    }

    #[test]
    fn closures_act_as_probes() {
        let probe =
            |_: &'static DependencyGroup| -> Result<Availability> { Ok(Availability::Resolved) };
        assert_eq!(probe.probe(&GSON).unwrap(), Availability::Resolved);
    }
}
