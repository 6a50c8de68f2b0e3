use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use textquill::arg_parser::Args;
use textquill::file_manager::{write_targets, Output};

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let mut output = match Output::open(args.output.as_deref()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Error creating file: {e}");
            return ExitCode::FAILURE;
        }
    };

    let failures = match write_targets(&args.path, args.format, args.recursive, &mut output) {
        Ok(failures) => failures,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = output.finish() {
        eprintln!("Error writing output: {e}");
        return ExitCode::FAILURE;
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
