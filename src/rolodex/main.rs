use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::RolodexApi;
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, StorageError};
use rolodex::store::fs::FileStore;
use std::io;
use std::path::PathBuf;
use tracing::Level;

mod args;
mod print;
mod shell;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let home = resolve_home(cli.home)?;
    let config = RolodexConfig::load(&home)?;
    let store = FileStore::in_dir(&home, &config.data_file);
    let mut api = RolodexApi::open(store, config)?;

    match cli.command.and_then(Commands::into_command) {
        Some(command) => {
            let result = api.execute(command)?;
            print::print_result(&mut io::stdout().lock(), &result)?;
        }
        None => {
            shell::run(&mut api, io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = explicit {
        return Ok(home);
    }
    let dirs = ProjectDirs::from("com", "rolodex", "rolodex").ok_or(StorageError::NoHomeDir)?;
    Ok(dirs.data_dir().to_path_buf())
}
