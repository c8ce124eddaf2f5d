//! VIT Bot relay server binary.
//!
//! Serves the chat page and relays `/api/chat` conversations to the
//! completion API. Settings come from flags, the environment, or a `.env`
//! file in the working directory.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vitbot_api::config::{ApiConfig, load_system_prompt};
use vitbot_core::completion::{CompletionConfig, DEFAULT_API_URL, DEFAULT_MODEL};
use vitbot_core::prompt::DOMAIN_SYSTEM_PROMPT;

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "vitbot_server", about = "VIT Bot chat relay server", version)]
struct Args {
    /// Interface to listen on.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Directory served for `/` and other static assets.
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    static_dir: PathBuf,

    /// File whose contents replace the built-in system prompt.
    #[arg(long, env = "SYSTEM_PROMPT_FILE")]
    system_prompt_file: Option<PathBuf>,

    /// Bearer token for the completion API.
    #[arg(long, env = "PERPLEXITY_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Completion API endpoint.
    #[arg(long, env = "PERPLEXITY_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model identifier sent with every completion request.
    #[arg(long, env = "PERPLEXITY_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Upper bound, in seconds, on a single completion request.
    #[arg(
        long,
        env = "UPSTREAM_TIMEOUT_SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    upstream_timeout_secs: u64,
}

impl Args {
    fn into_config(self) -> Result<ApiConfig, vitbot_api::config::ConfigError> {
        let system_prompt = match &self.system_prompt_file {
            Some(path) => load_system_prompt(path)?,
            None => DOMAIN_SYSTEM_PROMPT.to_string(),
        };

        Ok(ApiConfig {
            bind_addr: format!("{}:{}", self.host, self.port),
            static_dir: self.static_dir,
            system_prompt,
            completion: CompletionConfig {
                api_url: self.api_url,
                api_key: self.api_key,
                model: self.model,
                timeout: Duration::from_secs(self.upstream_timeout_secs),
            },
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,vitbot_api=debug,vitbot_core=debug")),
        )
        .init();

    let args = Args::parse();
    let custom_prompt = args.system_prompt_file.is_some();
    let config = args.into_config()?;

    info!(
        version = vitbot_core::version(),
        api_url = %config.completion.api_url,
        model = %config.completion.model,
        timeout_secs = config.completion.timeout.as_secs(),
        static_dir = %config.static_dir.display(),
        custom_prompt,
        "starting vitbot_server"
    );

    let state = vitbot_api::AppState::new(config.clone())?;
    let app = vitbot_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;
    info!(addr = %local_addr, "VIT Bot server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("received Ctrl+C, shutting down");
        })
        .await?;

    Ok(())
}
