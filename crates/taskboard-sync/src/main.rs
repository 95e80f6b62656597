/*
[INPUT]:  CLI arguments, YAML configuration file, TASKBOARD_* environment
[OUTPUT]: Interactive task board or one-shot listing against the REST backend
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use taskboard_adapter::TaskboardClient;
use taskboard_sync::config::LogConfig;
use taskboard_sync::{AppConfig, StatusFilter, TaskStore};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "Task tracker with threaded comments")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Backend base URL, overrides the configuration file
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Menu-driven board (default)
    Interactive,
    /// Load and print the board once
    List {
        /// all, pending, in-progress or completed
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Write a default configuration file
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config_path = args.config_path.clone().or_else(AppConfig::default_path);

    if let Some(Command::Init { output, force }) = args.command {
        let output = output
            .or(config_path)
            .context("no configuration directory available, pass --output")?;
        return cli::init::run_init(output, force);
    }

    let mut config = AppConfig::load(config_path.as_deref())?;
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(level) = args.log_level {
        config.log.level = level;
    }
    let _log_guard = init_tracing(&config.log)?;

    info!(
        base_url = %config.api.base_url,
        config_path = ?config_path,
        "starting taskboard"
    );

    let client =
        TaskboardClient::with_config_and_base_url(config.api.client_config(), &config.api.base_url)
            .context("create API client")?;
    let mut store = TaskStore::new(client);

    match args.command {
        Some(Command::List { status }) => run_list(&mut store, status).await,
        _ => cli::interactive::run_interactive(&mut store).await,
    }
}

async fn run_list(store: &mut TaskStore<TaskboardClient>, status: StatusFilter) -> Result<()> {
    let loaded = store.load_tasks().await;
    cli::render::print_notices(&store.take_notices());
    loaded.context("load tasks")?;

    store.set_filter(status);
    cli::render::render_board(store);
    Ok(())
}

fn init_tracing(log: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&log.level).context("invalid log level")?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match &log.file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .context("log file path must name a file")?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(Some(guard))
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))
                .context("initialize tracing subscriber")?;
            Ok(None)
        }
    }
}
