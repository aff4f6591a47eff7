use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

use commands::{OutputFormat, validate_command};

#[derive(Parser)]
#[command(
    name = "ecosystem-validate",
    about = "Validates an ecosystem project entry against the project schema",
    version,
    long_about = None
)]
struct Cli {
    /// Path to the project JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Output format for the validation result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match validate_command(&cli.input, cli.format) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("ecosystem_validate=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("ecosystem_validate=info"), // -v: info messages
        _ => EnvFilter::new("ecosystem_validate=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
