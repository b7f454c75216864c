mod material;
mod sr;
mod trim;

use material::run_material;
use sr::run_sr;
use trim::run_trim;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Trim(args) => run_trim(args, ctx),
        Command::Sr(args) => run_sr(args, ctx),
        Command::Material(args) => run_material(args, ctx),
    }
}
