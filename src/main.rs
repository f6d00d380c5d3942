use clap::Parser;
use env_logger::{Builder, Env, Target};
use pgn_index::args::Args;
use pgn_index::{config, presentation};
use std::process::ExitCode;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default));
    builder.target(Target::Stderr);
    builder.init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.output.verbose);

    let config = match config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match pgn_index_engine::run(&config) {
        Ok(report) => {
            if !args.output.quiet {
                presentation::print_report(&report, args.output.format);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
