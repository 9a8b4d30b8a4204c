use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use nextword::{DEFAULT_CANDIDATE_NUM, Nextword, Params};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use nextword_server::{AppState, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_config()?;
    info!("binding to {}:{}", config.host, config.port);
    info!("using data directory {}", config.data_path.display());
    info!(
        "candidate count: {} (greedy: {})",
        config.candidate_num, config.greedy
    );
    if config.disable_cache {
        info!("cache headers disabled");
    }

    let engine = Nextword::new(
        Params::new(&config.data_path)
            .candidate_num(config.candidate_num)
            .greedy(config.greedy),
    )
    .with_context(|| format!("invalid data directory {}", config.data_path.display()))?;

    let state = AppState {
        engine: Arc::new(engine),
        disable_cache: config.disable_cache,
    };

    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid listen address")?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    data_path: PathBuf,
    candidate_num: usize,
    greedy: bool,
    disable_cache: bool,
}

fn load_config() -> anyhow::Result<Config> {
    let mut disable_cache = false;
    let mut cli_greedy = false;
    let mut cli_data_path: Option<PathBuf> = None;
    let mut cli_candidate_num: Option<usize> = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-cache" => disable_cache = true,
            "--greedy" => cli_greedy = true,
            "--data-path" => {
                if let Some(path) = args.next() {
                    cli_data_path = Some(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(path) = arg.strip_prefix("--data-path=") {
                    cli_data_path = Some(PathBuf::from(path));
                } else if let Some(raw) = arg.strip_prefix("--candidate-num=") {
                    cli_candidate_num = Some(
                        raw.parse()
                            .with_context(|| format!("invalid --candidate-num {raw:?}"))?,
                    );
                }
            }
        }
    }

    let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let data_path = cli_data_path
        .or_else(|| env::var("NEXTWORD_DATA_PATH").ok().map(PathBuf::from))
        .context("NEXTWORD_DATA_PATH is not set (or pass --data-path <dir>)")?;
    let candidate_num = cli_candidate_num
        .or_else(|| {
            env::var("NEXTWORD_CANDIDATE_NUM")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        })
        .unwrap_or(DEFAULT_CANDIDATE_NUM);
    let greedy = cli_greedy
        || env::var("NEXTWORD_GREEDY")
            .ok()
            .as_deref()
            .is_some_and(parse_flag);

    Ok(Config {
        host,
        port,
        data_path,
        candidate_num,
        greedy,
        disable_cache,
    })
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
