use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub fn list_overrides_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_list-overrides"))
}

/// `list-overrides` with every environment source of resolution entries cleared.
pub fn isolated_command() -> Command {
    let mut cmd = Command::new(list_overrides_binary());
    cmd.env_remove("TLC_OVERRIDES_PATH")
        .env_remove("CLASSPATH")
        .env_remove("RUST_LOG");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to run command: {:?}", cmd))
}

/// Temporary directory holding empty files with the given names.
pub fn lib_dir_with(files: &[&str]) -> Result<TempDir> {
    let dir = TempDir::new().context("failed to allocate lib dir")?;
    for name in files {
        touch(&dir.path().join(name))?;
    }
    Ok(dir)
}

pub fn touch(path: &Path) -> Result<()> {
    File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(())
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
