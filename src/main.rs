mod cli;

use clap::Parser;
use cli::{handle_config_action, run_convert, Args, Command};
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

/// Map `-v` occurrences to a log level. Warnings are always shown.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Log to stderr so `--print` output on stdout stays clean.
fn init_logging(verbose: u8) {
    // Only fails if a logger is already installed
    let _ = TermLogger::init(
        log_level(verbose),
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match &args.command {
        Some(Command::Config { action }) => handle_config_action(action, &args),
        None => run_convert(&args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
