use anyhow::{Context, Result};
use clap::Parser;
use filenamify::{SanitizeOptions, Sanitizer, config, logging, panic_handler};
use log::{debug, info};
use std::ffi::{OsStr, OsString};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "filenamify", version, about = "Turn arbitrary strings into safe filenames")]
struct Args {
    /// Strings to sanitize. Read from stdin, one per line, when omitted.
    inputs: Vec<OsString>,

    /// Text substituted for disallowed characters (default "!")
    #[arg(short, long, allow_hyphen_values = true)]
    replacement: Option<String>,

    /// Maximum filename length in characters (default 100)
    #[arg(short, long)]
    max_length: Option<usize>,

    /// Treat inputs as paths and only sanitize their last segment
    #[arg(short, long)]
    path: bool,

    /// Config file (default: <config dir>/filenamify/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn cli_options(&self) -> SanitizeOptions {
        SanitizeOptions {
            replacement: self.replacement.clone(),
            max_length: self.max_length,
        }
    }
}

fn main() -> Result<()> {
    panic_handler::initialize_panic_handler();

    let args = Args::parse();
    logging::init_logging(
        logging::level_from_verbosity(args.verbose, args.quiet),
        args.log_file.as_deref(),
    )?;

    let settings = config::load_settings(args.config.as_deref())?;
    let options = settings.options().merge(args.cli_options());
    debug!("Effective options: {options:?}");

    let sanitizer = Sanitizer::new(&options).context("Invalid sanitizer options")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.inputs.is_empty() {
        info!("Reading inputs from stdin");
        for line in io::stdin().lock().split(b'\n') {
            let mut line = line.context("Failed to read from stdin")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let line = String::from_utf8_lossy(&line);
            process(&sanitizer, OsStr::new(&*line), args.path, &mut out)?;
        }
    } else {
        for input in &args.inputs {
            process(&sanitizer, input, args.path, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn process(
    sanitizer: &Sanitizer,
    input: &OsStr,
    as_path: bool,
    out: &mut impl Write,
) -> Result<()> {
    if as_path {
        let sanitized = sanitizer
            .sanitize_path(input)
            .with_context(|| format!("Failed to sanitize path {}", input.to_string_lossy()))?;
        writeln!(out, "{}", sanitized.display())?;
    } else {
        writeln!(out, "{}", sanitizer.sanitize(&input.to_string_lossy()))?;
    }
    Ok(())
}
