use std::io::{self, Write};

use anyhow::{Context, Result};

use srim_input::{Material, Phase};

use crate::cli::MaterialArgs;
use crate::display::{Context as DisplayContext, print_composition};

pub fn run_material(args: MaterialArgs, ctx: DisplayContext) -> Result<()> {
    let material = Material::from_formula(&args.formula, args.density, Phase::Solid)
        .with_context(|| format!("Cannot build a material from '{}'", args.formula))?;

    if ctx.interactive {
        print_composition(&material);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for entry in material.elements() {
        writeln!(
            stdout,
            "{}\t{}\t{}\t{}\t{}",
            entry.element.symbol(),
            entry.stoich,
            entry.displacement,
            entry.lattice,
            entry.surface
        )?;
    }
    Ok(())
}
