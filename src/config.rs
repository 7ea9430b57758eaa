//! Resolution-path configuration.
//!
//! The path is assembled in precedence order: explicit entries (CLI flags),
//! then `TLC_OVERRIDES_PATH`, then `CLASSPATH`. Both variables use the
//! platform path-list separator, and empty components are dropped.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Dedicated search path for override libraries.
pub const OVERRIDES_PATH_ENV: &str = "TLC_OVERRIDES_PATH";
/// The host JVM's classpath; jars placed there are visible to TLC as well.
pub const CLASSPATH_ENV: &str = "CLASSPATH";

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Files, directories, or `dir/*` wildcards searched for group artifacts.
    pub lib_paths: Vec<PathBuf>,
}

impl Config {
    /// Configuration from the environment alone.
    pub fn from_env() -> Self {
        Self::from_sources(Vec::new())
    }

    /// Explicit entries first, then the environment.
    pub fn from_sources(explicit: Vec<PathBuf>) -> Self {
        Self::assemble(
            explicit,
            env::var_os(OVERRIDES_PATH_ENV).as_deref(),
            env::var_os(CLASSPATH_ENV).as_deref(),
        )
    }

    fn assemble(
        explicit: Vec<PathBuf>,
        overrides_path: Option<&OsStr>,
        classpath: Option<&OsStr>,
    ) -> Self {
        let mut lib_paths: Vec<PathBuf> = explicit
            .into_iter()
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        lib_paths.extend(split_path_list(overrides_path));
        lib_paths.extend(split_path_list(classpath));
        Self { lib_paths }
    }
}

fn split_path_list(value: Option<&OsStr>) -> Vec<PathBuf> {
    let Some(value) = value else {
        return Vec::new();
    };
    env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Join entries back into a single path-list string, for diagnostics.
pub fn display_path_list(paths: &[PathBuf]) -> String {
    match env::join_paths(paths) {
        Ok(joined) => joined.to_string_lossy().into_owned(),
        Err(_) => paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn explicit_entries_precede_environment() {
        let config = Config::assemble(
            vec![PathBuf::from("/opt/cli")],
            Some(OsStr::new("/opt/overrides:/opt/more")),
            Some(OsStr::new("/opt/cp/*")),
        );
        assert_eq!(
            config.lib_paths,
            vec![
                PathBuf::from("/opt/cli"),
                PathBuf::from("/opt/overrides"),
                PathBuf::from("/opt/more"),
                PathBuf::from("/opt/cp/*"),
            ]
        );
    }

    #[test]
    fn empty_components_are_ignored() {
        let config = Config::assemble(
            vec![PathBuf::new()],
            Some(OsStr::new("::/opt/a::")),
            Some(OsStr::new("")),
        );
        assert_eq!(config.lib_paths, vec![PathBuf::from("/opt/a")]);
    }

    #[test]
    fn unset_sources_yield_empty_path() {
        let config = Config::assemble(Vec::new(), None, None);
        assert!(config.lib_paths.is_empty());
    }

    #[test]
    fn display_joins_with_separator() {
        let paths = vec![PathBuf::from("/a"), PathBuf::from("/b/*")];
        assert_eq!(display_path_list(&paths), "/a:/b/*");
    }
}
