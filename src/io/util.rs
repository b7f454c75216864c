use std::fs;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Formats a real the way SRIM's own tools print it: shortest round-trip
/// digits, always with a decimal point or exponent (`1.0`, `0.25`, `1e-05`).
pub fn real(value: f64) -> String {
    let repr = format!("{value:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Writes `contents` to `dir/name` in one call and returns the full path.
pub fn write_blob(dir: &Path, name: &str, contents: &[u8]) -> Result<PathBuf, Error> {
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|e| Error::write_file(&path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(path)
}
