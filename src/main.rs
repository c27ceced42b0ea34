//! `launchpad` binary: parse flags, set up logging, hand off to the dispatcher.

use std::process::ExitCode;

use clap::Parser;
use launchpad::cli::{Cli, CommandDispatcher};
use launchpad::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Diagnostics go to stderr so piped menu output stays clean.
/// `--debug` forces debug level; otherwise `RUST_LOG` or info.
fn init_tracing(debug: bool) {
    let filter = match debug {
        true => EnvFilter::new("launchpad=debug"),
        false => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("launchpad=info")),
    };
    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!(?cli, "parsed arguments");

    let output_mode = OutputMode::from_flags(cli.quiet, cli.verbose);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
        console::set_colors_enabled(false);
    }

    let project_root = match &cli.project {
        Some(path) => path.clone(),
        None => std::env::current_dir().unwrap_or_default(),
    };
    let mut ui = create_ui(output_mode);
    let dispatcher = CommandDispatcher::new(project_root).with_config_path(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(err) => {
            tracing::debug!(error = ?err, "session failed");
            ui.error(&format!("An error occurred: {}", err));
            ExitCode::FAILURE
        }
    }
}
