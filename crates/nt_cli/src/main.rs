use clap::Parser;
use nt_core::{Error, Mode, TimeUnit};
use nt_fetch::config::DEFAULT_URL_TEMPLATE;
use nt_fetch::secrets::DEFAULT_API_KEY_VAR;
use nt_fetch::{EnvSecretProvider, ExampleArticles, NewsApiClient, NewsApiConfig};
use nt_search::{ModeSwitch, NewsManager};
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::info;

mod duration;
mod logging;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyword news search with cache fallback", long_about = None)]
pub struct Cli {
    /// Startup mode: online queries the provider, offline serves built-in articles
    #[arg(long, env = "NT_MODE", default_value = "online")]
    mode: Mode,
    /// Provider endpoint with {keyword} and {apiKey} placeholders
    #[arg(long, env = "NEWS_API_URL", default_value = DEFAULT_URL_TEMPLATE)]
    api_url: String,
    /// Environment variable holding the provider API key
    #[arg(long, env = "NT_API_KEY_VAR", default_value = DEFAULT_API_KEY_VAR)]
    api_key_var: String,
    /// Provider request timeout (e.g. 10s, 1m30s)
    #[arg(long, env = "NT_TIMEOUT", default_value = "10s")]
    timeout: HumanDuration,
    #[arg(long, default_value = "memory")]
    cache: String,
    #[arg(long, env = "NT_LOG", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },
    /// Search once and print the result as JSON
    Search { keyword: String },
    /// Search once and print articles grouped by publication age
    Group {
        keyword: String,
        #[arg(long, default_value = "12")]
        interval: NonZeroU32,
        #[arg(long, default_value = "hours")]
        unit: TimeUnit,
    },
    /// Print the startup mode
    Mode,
}

fn build_manager(cli: &Cli) -> anyhow::Result<Arc<NewsManager>> {
    let config = NewsApiConfig::new(cli.api_url.clone(), cli.timeout.0);
    let secrets = Arc::new(EnvSecretProvider::new(cli.api_key_var.clone()));
    let source = Arc::new(NewsApiClient::new(config, secrets)?);
    let cache = nt_storage::create_cache(&cli.cache)?;
    info!("💾 Cache initialized (using {})", cli.cache);

    Ok(Arc::new(NewsManager::new(
        source,
        cache,
        Arc::new(ExampleArticles::new()),
        Arc::new(ModeSwitch::new(cli.mode)),
    )))
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    let manager = build_manager(&cli)?;
    info!("📰 News search ready (mode: {})", manager.mode());

    let outcome = match cli.command {
        Commands::Serve { bind } => {
            nt_web::serve(bind, nt_web::AppState::new(manager)).await?;
            return Ok(());
        }
        Commands::Search { keyword } => match manager.search(&keyword).await {
            Ok(result) => print_json(&result),
            Err(e) => Err(e.into()),
        },
        Commands::Group { keyword, interval, unit } => {
            match manager.grouped_search(&keyword, interval, unit).await {
                Ok(grouped) => print_json(&grouped),
                Err(e) => Err(e.into()),
            }
        }
        Commands::Mode => {
            println!("{}", manager.mode());
            Ok(())
        }
    };

    match outcome {
        Err(e) => match e.downcast_ref::<Error>() {
            Some(Error::NoContent(message)) => {
                eprintln!("{}", message);
                Ok(())
            }
            _ => Err(e),
        },
        ok => ok,
    }
}
