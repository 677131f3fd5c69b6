mod cli;
mod commands;

use ryzom_config::RyzomConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only command output. `RUST_LOG`
/// takes precedence over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ryzom={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging starts so its level can apply.
    let loaded = ryzom_config::load_config(args.config.as_deref());
    let level = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| "info".into());
    init_logging(&level);

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        RyzomConfig::default()
    });
    tracing::debug!("ryzom-code v{} ({:?})", env!("CARGO_PKG_VERSION"), args.command);

    let mut stdout = std::io::stdout().lock();
    match commands::run(args.command, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
