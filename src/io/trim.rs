use std::io::Write;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::util::{real, write_blob};
use crate::model::composition::CompositionEntry;
use crate::run::Trim;

pub const FILENAME: &str = "TRIM.IN";

const TITLE: &str = "This file controls TRIM Calculations generated by srim-input";
const HEADER_ION: &str =
    "Ion: Z, Mass [amu], Energy [keV], Angle [degrees], Number Ions, Bragg Corr, AutoSave Number";
const HEADER_CASCADE: &str = "Cascades(1=Kitchn-Peese, 2=Full-Cascade, 3=Sputtering, 4-5=Ions;6-7=Neutrons), Random Number Seed, Reminders";
const HEADER_DISKFILES: &str = "Diskfiles (0=no,1=yes): RANGES.txt, BACKSCATT.txt, TRANSMIT.txt, Sputtered, COLLISIONS.txt(0=no, 1=Ion, 2=Ion+Recoils), Special EXYZ.txt file";
const HEADER_TARGET: &str = "Target material : Number of Elements, Number of Layers";
const HEADER_PLOT: &str = "PlotType (0-5); Plot Depths: Xmin, Xmax(Ang.) [=0 0 for Viewing Full Target]";
const HEADER_ELEMENTS: &str = "Target Elements:    Z   Mass [amu]";
const HEADER_LAYER_1: &str = "Layer    Layer Name   Width Density";
const HEADER_LAYER_2: &str = "Number   Description  (Ang) (g/cm^3)";
const HEADER_PHASES: &str = "0  Target layer phases (0=Solid, 1=Gas)";
const HEADER_BRAGG: &str = "Target Compound Corrections (Bragg)";
const HEADER_DISPLACEMENT: &str = "Individual target atom displacement energies (eV)";
const HEADER_LATTICE: &str = "Individual target atom lattice binding energies (eV)";
const HEADER_SURFACE: &str = "Individual target atom surface binding energies (eV)";
const HEADER_VERSION: &str = "Stopping Power Version (1=2011, 0=2011)";

/// Writes `trim` in TRIM.IN layout with CRLF line endings.
pub fn write<W: Write>(mut writer: W, trim: &Trim) -> Result<(), Error> {
    let ion = trim.ion();
    let target = trim.target();
    let settings = trim.settings();
    let n_elements = target.element_count();

    crlf!(writer, "{}", TITLE)?;

    crlf!(writer, "{}", HEADER_ION)?;
    crlf!(
        writer,
        "{} {} {} {} {} {} {}",
        ion.atomic_number(),
        real(ion.mass()),
        real(ion.energy_kev()),
        real(settings.angle_ions),
        trim.number_ions(),
        real(settings.bragg_correction),
        settings.autosave
    )?;

    crlf!(writer, "{}", HEADER_CASCADE)?;
    crlf!(
        writer,
        "{} {} {}",
        trim.calculation().code(),
        settings.random_seed,
        settings.reminders
    )?;

    crlf!(writer, "{}", HEADER_DISKFILES)?;
    crlf!(
        writer,
        "{} {} {} {} {} {}",
        settings.ranges,
        settings.backscattered,
        settings.transmit,
        settings.sputtered,
        settings.collisions,
        settings.exyz
    )?;

    crlf!(writer, "{}", HEADER_TARGET)?;
    crlf!(
        writer,
        "\"{}\" {} {}",
        settings.description,
        n_elements,
        target.layer_count()
    )?;

    crlf!(writer, "{}", HEADER_PLOT)?;
    crlf!(
        writer,
        "{} {} {}",
        settings.plot_mode,
        real(settings.plot_xmin),
        real(settings.plot_xmax)
    )?;

    crlf!(writer, "{}", HEADER_ELEMENTS)?;
    for (index, entry) in target.entries().enumerate() {
        crlf!(
            writer,
            "Atom {} = {} =     {} {}",
            index + 1,
            entry.element.symbol(),
            entry.element.atomic_number(),
            real(entry.element.atomic_mass())
        )?;
    }

    let mut header_1 = HEADER_LAYER_1.to_string();
    let mut header_2 = HEADER_LAYER_2.to_string();
    for entry in target.entries() {
        header_1.push_str(&format!(
            "  {}({})",
            entry.element.symbol(),
            entry.element.atomic_number()
        ));
        header_2.push_str("Stoich");
    }
    crlf!(writer, "{}", header_1)?;
    crlf!(writer, "{}", header_2)?;

    let mut offset = 0;
    for (index, layer) in target.layers().iter().enumerate() {
        let mut row = format!(
            "{} \"{}\" {} {}",
            index + 1,
            layer.name(),
            real(layer.width()),
            real(layer.density())
        );
        row.push_str(&" 0.0".repeat(offset));
        for entry in layer.elements() {
            row.push_str(&format!(" {} ", real(entry.stoich)));
        }
        row.push_str(&" 0.0".repeat(n_elements - offset - layer.len()));
        offset += layer.len();
        crlf!(writer, "{}", row)?;
    }

    crlf!(writer, "{}", HEADER_PHASES)?;
    crlf!(
        writer,
        "{}",
        join(target.layers().iter().map(|l| l.phase().code().to_string()))
    )?;

    crlf!(writer, "{}", HEADER_BRAGG)?;
    crlf!(
        writer,
        " {}",
        join(target.layers().iter().map(|l| real(l.bragg_correction())))
    )?;

    let energy_blocks: [(&str, fn(&CompositionEntry) -> f64); 3] = [
        (HEADER_DISPLACEMENT, |e| e.displacement),
        (HEADER_LATTICE, |e| e.lattice),
        (HEADER_SURFACE, |e| e.surface),
    ];
    for (header, field) in energy_blocks {
        crlf!(writer, "{}", header)?;
        let mut values = String::new();
        for entry in target.entries() {
            values.push(' ');
            values.push_str(&real(field(entry)));
        }
        crlf!(writer, "{}", values)?;
    }

    crlf!(writer, "{}", HEADER_VERSION)?;
    crlf!(writer, "{}", settings.version)?;

    Ok(())
}

/// Renders `trim` and writes it to `dir/TRIM.IN` as one blob.
pub fn write_to_dir(dir: &Path, trim: &Trim) -> Result<PathBuf, Error> {
    let mut buf = Vec::new();
    write(&mut buf, trim)?;
    write_blob(dir, FILENAME, &buf)
}

fn join(parts: impl Iterator<Item = String>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}
