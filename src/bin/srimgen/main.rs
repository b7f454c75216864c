use std::process::ExitCode;

mod cli;
mod commands;
mod display;
mod io;
mod logger;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect().with_quiet(cli.global.quiet);

    if let Err(e) = logger::init(cli.global.verbose) {
        eprintln!("   warning: logging disabled: {e}");
    }

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
