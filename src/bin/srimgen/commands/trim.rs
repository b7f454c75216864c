use anyhow::{Context, Result};

use srim_input::AutoTrim;
use srim_input::config::RunDescription;
use srim_input::io::{autotrim, trim};

use crate::cli::TrimArgs;
use crate::display::{Context as DisplayContext, Progress, print_run_summary};
use crate::io::prepare_output_dir;

const TOTAL_STEPS: u8 = 2;

pub fn run_trim(args: TrimArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading run description");
    let run = RunDescription::from_path(&args.config)?;
    let run_trim = run
        .trim()
        .with_context(|| format!("Invalid TRIM run in {}", args.config.display()))?;
    let mode = match args.mode {
        Some(code) => AutoTrim::try_from(code)?,
        None => run.autotrim(),
    };
    progress.complete_step(
        "Reading run description",
        &[
            format!("{} ion at {} keV", run_trim.ion().symbol(), run_trim.ion().energy_kev()),
            format!(
                "{} ions, calculation mode {}",
                run_trim.number_ions(),
                run_trim.calculation().code()
            ),
        ],
    );

    if ctx.interactive {
        print_run_summary(run_trim.ion(), run_trim.target());
    }

    progress.step("Writing input files");
    let dir = args.out.output.as_path();
    prepare_output_dir(dir)?;
    let trim_path = trim::write_to_dir(dir, &run_trim)?;
    let auto_path = autotrim::write_to_dir(dir, mode)?;
    progress.complete_step(
        "Writing input files",
        &[
            trim_path.display().to_string(),
            format!("{} (mode {})", auto_path.display(), mode.code()),
        ],
    );

    progress.finish();

    Ok(())
}
