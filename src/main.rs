use clap::{error::ErrorKind, Parser};
use owo_colors::OwoColorize;
use std::{path::PathBuf, process::exit};
use tracing_subscriber::EnvFilter;
use yaml2json::Error;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// YAML file to convert, written to `<PATH>.json`
    path: PathBuf,
}

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        exit(e.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<(), Error> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered.trim_start_matches("error: ").trim_end();
            return Err(Error::Usage(message.to_string()));
        }
    };
    yaml2json::convert(&args.path)?;
    Ok(())
}
