//! Interactive contacts directory.
//!
//! # Responsibility
//! - Parse command-line options and start optional file logging.
//! - Open the contacts file and hand stdin/stdout to the menu loop.

mod menu;

use clap::Parser;
use contacts_core::{default_log_level, init_logging, ContactService, DEFAULT_CONTACTS_FILE};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "contacts", version, about = "Personal contact directory")]
struct Cli {
    /// Contacts JSON file.
    #[arg(long, default_value = DEFAULT_CONTACTS_FILE)]
    file: PathBuf,
    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let mut service = match ContactService::open(&cli.file) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("cannot open `{}`: {err}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match menu::run_menu(&mut service, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=menu_loop module=cli status=error error={}", err);
            eprintln!("i/o error: {err}");
            ExitCode::FAILURE
        }
    }
}
