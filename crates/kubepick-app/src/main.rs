mod app_log;
mod cli;
mod command;
mod keybindings;
mod picker;

use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use crossterm::style::Stylize;
use crossterm::terminal;
use tracing_subscriber::EnvFilter;

use kubepick_config::AppConfig;
use kubepick_core::pipeline::{self, StageError, SwitchOptions};
use kubepick_core::HomeEnv;

use crate::app_log::AppLogMakeWriter;
use crate::cli::Args;
use crate::picker::TerminalPicker;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);
    install_panic_hook();

    let result = run(&args);
    app_log::flush_to_stderr();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    if args.init_config {
        let path = match &args.config {
            Some(path) => {
                AppConfig::init_at(path)?;
                path.clone()
            }
            None => AppConfig::init_default()?,
        };
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => AppConfig::load_from(path).with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::load(),
    };

    let path = match &args.kubeconfig {
        Some(path) => path.clone(),
        None => match pipeline::resolve_path(std::env::consts::OS, &HomeEnv::from_process()) {
            Ok(path) => path,
            Err(e) => return report(e),
        },
    };

    let mut picker = TerminalPicker::new(&config);
    let options = SwitchOptions { mark_active: config.features.mark_current };
    match pipeline::run(&path, &mut picker, options) {
        Ok(switched) => {
            if config.features.color {
                println!("Switched to context: {}", switched.current.as_str().cyan());
            } else {
                println!("Switched to context: {}", switched.current);
            }
            Ok(())
        }
        Err(e) => report(e),
    }
}

/// Stage failures are reported on stdout and end the run normally; only a
/// fatal one becomes an error exit.
fn report(e: StageError) -> anyhow::Result<()> {
    if e.is_fatal() {
        return Err(e.into());
    }
    println!("{e}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(AppLogMakeWriter).with_ansi(false).init();
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        app_log::flush_to_stderr();
        original_hook(panic_info);
    }));
}
