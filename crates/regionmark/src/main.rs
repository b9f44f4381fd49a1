//! Regionmark - replay an annotation script and print the labelled regions
//!
//! ## Usage
//!
//! `regionmark <script.yaml> [--config <path>] [--keybindings <path>]`
//!
//! Set RUST_LOG=debug for a trace of every engine transition.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use regionmark::config::{default_config_path, load_config};
use regionmark::keybindings::{default_keybindings_path, load_keybindings};
use regionmark::script::{load_script, run_script};

struct Args {
    script: PathBuf,
    config: PathBuf,
    keybindings: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut script = None;
    let mut config = default_config_path();
    let mut keybindings = default_keybindings_path();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config = args.next().map(PathBuf::from).context("--config needs a path")?;
            }
            "--keybindings" => {
                keybindings = args
                    .next()
                    .map(PathBuf::from)
                    .context("--keybindings needs a path")?;
            }
            other if other.starts_with("--") => bail!("Unknown flag: {}", other),
            other => script = Some(PathBuf::from(other)),
        }
    }

    let Some(script) = script else {
        bail!("Usage: regionmark <script.yaml> [--config <path>] [--keybindings <path>]");
    };
    Ok(Args {
        script,
        config,
        keybindings,
    })
}

fn main() -> Result<()> {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = parse_args()?;
    log::info!("regionmark starting up");

    let config = load_config(&args.config);
    let bindings = load_keybindings(&args.keybindings).annotate;

    let script = load_script(&args.script)
        .with_context(|| format!("Failed to load script {:?}", args.script))?;
    let session = run_script(&script, config, bindings).context("Script replay failed")?;

    for line in session.help_lines() {
        log::info!("{}", line);
    }
    println!("{}", session.formatted_output());
    Ok(())
}
