use std::io;
use std::process::ExitCode;

use tally_cli::{Cli, Commands, SessionOutcome, Shell, report};
use tally_infra::FileInventoryStore;

fn main() -> anyhow::Result<ExitCode> {
    tally_observability::init();

    let cli = Cli::parse_args();
    let store = FileInventoryStore::from_config(&cli.store_config());
    tracing::debug!(path = %store.path().display(), "using inventory file");

    match cli.command_or_default() {
        Commands::Shell => {
            let mut shell = Shell::open(store, io::stdin().lock(), io::stdout().lock())?;
            match shell.run()? {
                SessionOutcome::Saved => Ok(ExitCode::SUCCESS),
                SessionOutcome::SaveFailed => Ok(ExitCode::FAILURE),
            }
        }
        Commands::Report { json } => {
            report::run(&store, json, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
