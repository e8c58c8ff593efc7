mod batch;
mod convert;

use crate::cli::{Commands, GTrace};
use anyhow::Result;
use clap::CommandFactory;

pub fn handle_commands(args: GTrace) -> Result<()> {
    match args.command {
        Some(Commands::Convert(convert_args)) => convert::handle_convert(&convert_args),
        Some(Commands::Completion { shell }) => {
            let mut cmd = GTrace::command();
            clap_complete::generate(shell, &mut cmd, "gtrace", &mut std::io::stdout());
            Ok(())
        }
        None => batch::handle_batch(args.config.as_ref()),
    }
}
