use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, warn};
use std::{io::Write, path::PathBuf, process};
use wiki_docbook_config::Config;
use wiki_docbook_engine::{ConvertOptions, convert_files};

/// Convert Google Code wiki pages to DocBook format.
#[derive(Debug, Parser)]
#[command(name = "gwiki2docbook", version)]
struct Cli {
    /// Wiki pages, concatenated into one article in the given order.
    #[arg(required = true, value_name = "PAGE")]
    pages: Vec<PathBuf>,

    /// Document language: en, ru, etc.
    #[arg(short, long)]
    language: Option<String>,

    /// Verbose mode.
    #[arg(short, long)]
    verbose: bool,

    /// Rewrite images under this URL to local `file:./` references.
    #[arg(short = 'b', long = "base-url", value_name = "URL")]
    base_url: Option<String>,

    /// Configuration file [default: ~/.config/wiki-docbook/config.toml].
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?.unwrap_or_default();
    let options = merge_options(&cli, config);
    debug!(
        "converting {} page(s), language {:?}",
        cli.pages.len(),
        options.language
    );

    let document = convert_files(&cli.pages, &options).context("Failed to convert wiki pages")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(document.as_bytes())
        .context("Failed to write document")?;
    stdout.flush().context("Failed to write document")?;
    Ok(())
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Option<Config>> {
    let Some(path) = explicit else {
        return Ok(Config::load()?);
    };
    let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
    let config = Config::load_from_path(&path)?;
    if config.is_none() {
        warn!("config file {} not found, using defaults", path.display());
    }
    Ok(config)
}

/// Command-line flags win over the config file, which wins over defaults.
fn merge_options(cli: &Cli, config: Config) -> ConvertOptions {
    let defaults = ConvertOptions::default();
    ConvertOptions {
        language: cli
            .language
            .clone()
            .or(config.language)
            .unwrap_or(defaults.language),
        image_base_url: cli
            .base_url
            .clone()
            .or(config.image_base_url)
            .or(defaults.image_base_url),
    }
}
