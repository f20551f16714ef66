use anyhow::Context;
use clap::Parser;
use qr2unicode::{Config, Converter, OutputSink};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qr2unicode",
    version,
    about = "Generate or process a QR code and print it as Unicode blocks"
)]
struct Cli {
    /// Text to generate a QR code from, or the filename of a QR code image to be processed
    input: String,

    /// Output file to write the result to (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Treat anything darker than the threshold as filled, not only pure black
    #[arg(long)]
    unified_threshold: bool,
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "qr2unicode=debug" } else { "qr2unicode=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.parse()?))
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = Config::from_env();
    if cli.unified_threshold {
        config = config.with_unified_threshold();
    }

    let sink = OutputSink::from_option(cli.output);
    Converter::new(config)
        .run(&cli.input, &sink)
        .with_context(|| format!("failed to convert {:?}", cli.input))?;

    Ok(())
}
