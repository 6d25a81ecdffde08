mod app_state;
mod cli;
mod shell;

use std::path::Path;
use std::process::ExitCode;

use connexx_config::ShellConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "connexx=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- MVAI Connexx crashed ---");
        eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
        eprintln!("----------------------------\n");

        default_hook(info);
    }));
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

fn build_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>());
    match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// A filter layer that can be swapped once the configured level is known.
fn reloadable_filter(directive: &str) -> (reload::Layer<EnvFilter, Registry>, FilterHandle) {
    reload::Layer::new(build_filter(directive))
}

/// Install the global subscriber. Returns the handle used to change its filter.
fn init_logging(directive: &str) -> FilterHandle {
    let (filter, handle) = reloadable_filter(directive);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
    handle
}

/// Apply a URL override, keeping the configured URL if the override is invalid.
fn apply_url_override(config: ShellConfig, url: Option<String>) -> ShellConfig {
    let Some(url) = url else {
        return config;
    };
    let overridden = config.clone().with_url_override(Some(url));
    match connexx_config::validation::validate(&overridden) {
        Ok(()) => overridden,
        Err(e) => {
            tracing::error!("Ignoring URL override: {e}");
            config
        }
    }
}

fn main() -> ExitCode {
    // Install panic hook for crash banners
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Initialize logging before config so loader warnings are shown
    let log_handle = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE));

    tracing::info!("MVAI Connexx v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load config
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let loaded = match args.config.as_deref() {
        Some(path) => connexx_config::load_config_from(Path::new(path)),
        None => connexx_config::load_config(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShellConfig::default()
    });

    // The CLI level wins; otherwise switch to the configured one
    if args.log_level.is_none() {
        let directive = config.logging.level.as_directive();
        if let Err(e) = log_handle.reload(build_filter(directive)) {
            tracing::warn!("Failed to apply configured log level {directive}: {e}");
        }
    }

    let config = apply_url_override(config, args.url);
    tracing::info!(
        "Config loaded (environment: {:?}, url: {})",
        config.app.environment,
        config.app.target_url()
    );

    // Ensure platform directories exist
    if let Err(e) = connexx_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::ConnexxApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
