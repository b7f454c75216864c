use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::util::{real, write_blob};
use crate::run::Sr;

pub const FILENAME: &str = "SR.IN";

const HEADER_DATA: &str = "---Stopping/Range Input Data (Number-format: Period = Decimal Point)";
const HEADER_OUTPUT_FILE: &str = "---Output File Name";
const HEADER_ION: &str = "---Ion(Z), Ion Mass(u)";
const HEADER_TARGET: &str = "---Target Data: (Solid=0,Gas=1), Density(g/cm3), Compound Corr.";
const HEADER_ELEMENT_COUNT: &str = "---Number of Target Elements";
const HEADER_ELEMENTS: &str = "---Target Elements: (Z), Target name, Stoich, Target Mass(u)";
const HEADER_UNITS: &str = "---Output Stopping Units (1-8)";
const HEADER_ENERGY: &str = "---Ion Energy : E-Min(keV), E-Max(keV)";

/// Writes `sr` in SR.IN layout with CRLF line endings.
pub fn write<W: Write>(mut writer: W, sr: &Sr) -> Result<(), Error> {
    let ion = sr.ion();
    let layer = sr.layer();
    let settings = sr.settings();

    crlf!(writer, "{}", HEADER_DATA)?;
    crlf!(writer, "{}", HEADER_OUTPUT_FILE)?;
    crlf!(writer, "{}", settings.output_filename)?;

    crlf!(writer, "{}", HEADER_ION)?;
    crlf!(writer, "{} {}", ion.atomic_number(), real(ion.mass()))?;

    crlf!(writer, "{}", HEADER_TARGET)?;
    crlf!(
        writer,
        "{} {} {}",
        layer.phase().code(),
        real(layer.density()),
        real(settings.correction)
    )?;
    crlf!(writer, "{}", HEADER_ELEMENT_COUNT)?;
    crlf!(writer, "{}", layer.len())?;

    crlf!(writer, "{}", HEADER_ELEMENTS)?;
    for entry in layer.elements() {
        crlf!(
            writer,
            "{} \"{}\" {} {}",
            entry.element.atomic_number(),
            entry.element.name(),
            real(entry.stoich),
            real(entry.element.atomic_mass())
        )?;
    }

    crlf!(writer, "{}", HEADER_UNITS)?;
    crlf!(writer, "{}", settings.output_type)?;

    crlf!(writer, "{}", HEADER_ENERGY)?;
    crlf!(
        writer,
        "{} {}",
        real(settings.energy_min / 1.0e3),
        real(ion.energy_kev())
    )?;

    Ok(())
}

/// Renders `sr` and writes it to `dir/SR.IN` as one blob.
pub fn write_to_dir(dir: &Path, sr: &Sr) -> Result<PathBuf, Error> {
    let mut buf = Vec::new();
    write(&mut buf, sr)?;
    write_blob(dir, FILENAME, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ion::Ion, layer::Layer, material::Phase};
    use crate::run::SrSettings;

    fn sample_sr() -> Sr {
        let layer = Layer::from_formula("H2O", 1.0, 1.0, Phase::Solid).unwrap();
        Sr::new(
            Ion::new("He", 2.0e6).unwrap(),
            layer,
            SrSettings {
                output_type: 5,
                ..Default::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn writes_sr_in_layout() {
        let mut buf = Vec::new();
        write(&mut buf, &sample_sr()).expect("write SR.IN");
        let out = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = out.split("\r\n").collect();

        assert_eq!(
            lines,
            vec![
                HEADER_DATA,
                HEADER_OUTPUT_FILE,
                "SRIM Outputs",
                HEADER_ION,
                "2 4.0026",
                HEADER_TARGET,
                "0 1.0 1.0",
                HEADER_ELEMENT_COUNT,
                "2",
                HEADER_ELEMENTS,
                format!("1 \"Hydrogen\" {} 1.008", real(2.0 / 3.0)).as_str(),
                format!("8 \"Oxygen\" {} 15.999", real(1.0 / 3.0)).as_str(),
                HEADER_UNITS,
                "5",
                HEADER_ENERGY,
                "1.0 2000.0",
                "",
            ]
        );
    }

    #[test]
    fn write_to_dir_creates_sr_in() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_to_dir(dir.path(), &sample_sr()).unwrap();
        assert!(path.ends_with(FILENAME));
        assert!(std::fs::read_to_string(path).unwrap().starts_with(HEADER_DATA));
    }
}
