mod app;
mod args;
mod error;
mod load;
mod paths;
mod render;

use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info });

    match app::run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to latest.log in the cache directory, or the working directory when
/// there is none. Logging is skipped if no file can be created.
fn init_logging(level: LevelFilter) {
    let file = paths::cache_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .and_then(|dir| {
            paths::rotate_logs(&dir);
            paths::log_file()
        })
        .and_then(|path| File::create(path).ok())
        .or_else(|| File::create("datatable.log").ok());

    if let Some(file) = file {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}
