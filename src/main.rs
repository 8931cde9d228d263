//! `CortexHub` binary entrypoint kept minimal. The full runtime lives in `app`.

use std::sync::OnceLock;
use std::{fmt, time::SystemTime};

use clap::Parser;

use cortexhub::{app, args, catalog::Catalog, config};

struct CortexHubTimer;

impl tracing_subscriber::fmt::time::FormatTime for CortexHubTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let secs = SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        let s = cortexhub::util::ts_to_date(Some(secs)); // "YYYY-MM-DD HH:MM:SS"
        let ts = s.replacen(' ', "-T", 1); // "YYYY-MM-DD-T HH:MM:SS"
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Initialize tracing, writing to `<config>/logs/cortexhub.log` with a stderr fallback.
///
/// Details:
/// - `RUST_LOG` takes precedence over `level`.
fn init_logging(level: &str) {
    let mut log_path = config::logs_dir();
    log_path.push("cortexhub.log");
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(CortexHubTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: stderr logger so startup is never blocked
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(CortexHubTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    init_logging(&args::determine_log_level(&cli));

    let mut settings = config::load_settings();
    if let Some(path) = &cli.catalog {
        settings.catalog_path = Some(path.clone());
    }
    tracing::info!(settings = ?settings, "CortexHub starting");

    let catalog = match Catalog::load(settings.catalog_path.as_deref()) {
        Ok(c) => c,
        Err(err) => {
            tracing::error!(error = %err, "failed to load catalog");
            eprintln!("cortexhub: {err}");
            std::process::exit(1);
        }
    };

    args::process_args(&cli, &settings, &catalog).await;

    if let Err(err) = app::run(&settings, catalog).await {
        tracing::error!(error = ?err, "Application error");
        eprintln!("cortexhub: {err}");
        std::process::exit(1);
    }
    tracing::info!("CortexHub exited");
}

#[cfg(test)]
mod tests {
    /// What: `FormatTime` impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives a `YYYY-MM-DD-T HH:MM:SS` stamp
    #[test]
    fn cortexhub_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::CortexHubTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }
}
