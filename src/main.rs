use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tacparse::config::Config;
use tacparse::{Exporter, FeedError, InputSource, OutputFormat};

#[derive(Parser)]
#[command(name = "tacparse", about = "Parse TACACS+ accounting logs into JSON, YAML, or readable records")]
struct Cli {
    /// Log file to parse. Reads piped stdin, or prompts for a name, when omitted.
    path: Option<PathBuf>,

    /// Print records as a JSON array. Takes precedence over --yaml.
    #[arg(long)]
    json: bool,

    /// Print records as a YAML sequence.
    #[arg(long)]
    yaml: bool,

    /// Write diagnostic tracing to stderr.
    #[arg(long)]
    debug: bool,

    /// Config file to use instead of ~/.config/tacparse/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else {
            OutputFormat::Plain
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<FeedError>() {
                Some(FeedError::Open { .. }) => eprintln!("Error: {e}."),
                _ => eprintln!("Error: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let format = cli.format();
    // Refuse unsupported formats before reading any input.
    tacparse::export::ensure_supported(format)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let resolver = config.resolver();
    tracing::debug!(
        reference_year = resolver.reference_year(),
        timezones = resolver.table().len(),
        "resolver ready"
    );

    let lines = InputSource::select(cli.path.clone()).read_lines()?;
    let exporter = Exporter::new(format).json_indent(config.output.json_indent);
    let output = tacparse::process(&lines, &resolver, &exporter)?;
    print!("{output}");
    Ok(())
}
