use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::util::write_blob;
use crate::run::AutoTrim;

pub const FILENAME: &str = "TRIMAUTO";

/// Writes the single mode digit TRIM reads from TRIMAUTO.
pub fn write<W: Write>(mut writer: W, mode: AutoTrim) -> Result<(), Error> {
    write!(writer, "{}", mode.code())?;
    Ok(())
}

pub fn write_to_dir(dir: &Path, mode: AutoTrim) -> Result<PathBuf, Error> {
    let mut buf = Vec::new();
    write(&mut buf, mode)?;
    write_blob(dir, FILENAME, &buf)
}
