use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Makes sure `dir` exists and is a directory, creating it if needed.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            bail!("Output path is not a directory: {}", dir.display());
        }
        return Ok(());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    log::info!("created output directory {}", dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("runs").join("ni");
        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
        prepare_output_dir(&dir).unwrap();
    }

    #[test]
    fn rejects_a_file_path() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(prepare_output_dir(tmp.path()).is_err());
    }
}
