use anyhow::{Context, Result};

use srim_input::config::RunDescription;
use srim_input::io::sr;

use crate::cli::SrArgs;
use crate::display::{Context as DisplayContext, Progress, print_composition};
use crate::io::prepare_output_dir;

const TOTAL_STEPS: u8 = 2;

pub fn run_sr(args: SrArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading run description");
    let run = RunDescription::from_path(&args.config)?;
    let run_sr = run
        .sr()
        .with_context(|| format!("Invalid SR run in {}", args.config.display()))?;
    progress.complete_step(
        "Reading run description",
        &[
            format!("{} ion up to {} keV", run_sr.ion().symbol(), run_sr.ion().energy_kev()),
            format!("Layer {}", run_sr.layer().name()),
        ],
    );

    if ctx.interactive {
        print_composition(run_sr.layer());
    }

    progress.step("Writing input files");
    let dir = args.out.output.as_path();
    prepare_output_dir(dir)?;
    let path = sr::write_to_dir(dir, &run_sr)?;
    progress.complete_step("Writing input files", &[path.display().to_string()]);

    progress.finish();

    Ok(())
}
