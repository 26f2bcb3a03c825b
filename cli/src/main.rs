//! CLI entrypoint for barista
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use barista_application::{
    ChatFlowController, ChatProgressNotifier, ConversationLogger, MenuCache, NoCatalog,
    NoConversationLogger, NoProgress, ProductCatalog,
};
use barista_infrastructure::{
    ConfigLoader, FileConfig, HttpAgentGateway, HttpProductCatalog, JsonlConversationLogger,
};
use barista_presentation::{
    ChatRepl, Cli, ConsoleFormatter, ConsoleNotifier, ProgressReporter, ReplConfig,
    SimpleProgress,
};
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    info!("Starting barista");
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    // === Dependency Injection ===
    let catalog = build_catalog(&config);

    // Menu mode needs only the catalog
    if cli.menu {
        let menu = MenuCache::new(catalog).get().await?;
        println!("{}", ConsoleFormatter::format_menu(&menu));
        return Ok(());
    }

    let Some(agent_url) = config.agent.url.clone().filter(|u| !u.trim().is_empty()) else {
        bail!(
            "No agent endpoint configured. Set [agent] url in barista.toml or BARISTA_AGENT__URL."
        );
    };
    let gateway = Arc::new(HttpAgentGateway::new(
        agent_url,
        config.agent.resolve_api_key(),
    )?);

    let show_progress = !cli.quiet && config.chat.show_progress;
    let progress: Arc<dyn ChatProgressNotifier> = if !show_progress {
        Arc::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let controller = ChatFlowController::new(gateway, catalog, config.to_chat_params())
        .with_notifier(Arc::new(ConsoleNotifier))
        .with_progress(progress)
        .with_conversation_logger(build_conversation_logger(&config));

    // Single message mode
    if let Some(message) = cli.message {
        let outcome = controller.send_message(&message).await?;
        println!(
            "{}",
            ConsoleFormatter::format_reply(&outcome.reply, outcome.fallback)
        );

        let cart = controller.cart_snapshot().await;
        if cart.has_items() {
            let total = controller.cart_total().await.ok();
            println!("{}", ConsoleFormatter::format_cart(&cart, total.as_ref()));
        }
        return Ok(());
    }

    // Chat mode
    let repl_config = ReplConfig {
        history_file: config.chat.history_file.clone(),
    };
    ChatRepl::new(Arc::new(controller))
        .with_history(repl_config.history_path())
        .run()
        .await?;

    Ok(())
}

/// Install the tracing subscriber: stderr filtered by `-v` count, plus an
/// optional plain-text log file.
fn init_tracing(verbose: u8, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let path = Path::new(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let file_level = if verbose == 0 { "info" } else { level };
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(EnvFilter::new(file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn build_catalog(config: &FileConfig) -> Arc<dyn ProductCatalog> {
    match config.catalog.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
        Some(base_url) => Arc::new(
            HttpProductCatalog::new(base_url, config.catalog.collection.as_str())
                .with_auth_token(config.catalog.resolve_auth_token()),
        ),
        None => Arc::new(NoCatalog),
    }
}

fn build_conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    match config
        .logging
        .conversation_log
        .as_deref()
        .and_then(|path| JsonlConversationLogger::new(path))
    {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}
