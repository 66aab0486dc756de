//! netdisk-files - Entry Point
//!
//! Operator command line over the file classification, digest and storage
//! primitives.

use log::debug;
use std::io::{self, Write};
use std::process;

use netdisk_files::commands::{USAGE, handle_command, parse_command};
use netdisk_files::error::handlers::{error_to_exit_code, report_error};
use netdisk_files::utils::logging::setup_logging;
use netdisk_files::{FileStoreConfig, FileStoreError, FileToolkit};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = FileStoreConfig::load();
    // Fall back to info so a bad config can still be reported
    setup_logging(config.as_ref().map_or("info", |c| c.log_level.as_str()));

    let code = match config
        .map_err(FileStoreError::from)
        .and_then(|config| run(&config, &args))
    {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            if let FileStoreError::Usage(_) = e {
                eprintln!("{}", USAGE);
            }
            error_to_exit_code(&e)
        }
    };

    process::exit(code);
}

fn run(config: &FileStoreConfig, args: &[String]) -> Result<i32, FileStoreError> {
    let toolkit = FileToolkit::from_config(config)?;
    let command = parse_command(args);
    debug!("Running {:?}", command);

    let mut stdout = io::stdout().lock();
    let result = handle_command(&toolkit, command, &mut stdout)?;
    stdout.flush()?;

    Ok(result.exit_code())
}
