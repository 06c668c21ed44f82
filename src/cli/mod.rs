use clap::Parser;

mod error;
mod scan;

pub use error::Error;

use self::scan::ScanArgs;

/// Scan a directory tree for TODO/FIXME-style marker comments
#[derive(Parser, Debug)]
#[command(name = "markers")]
#[command(about = "Scan a directory tree for marker comments", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    scan: ScanArgs,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    cli.scan.handle()
}
