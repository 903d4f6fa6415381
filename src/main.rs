use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deck_scout::api::state::AppState;
use deck_scout::clash::ClashClient;
use deck_scout::config::AppConfig;
use deck_scout::deck;

#[derive(Parser)]
#[command(name = "deck-scout")]
#[command(about = "Clash Royale Ultimate Champion deck lookup")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run one leaderboard lookup and print the deck
    Lookup {
        /// Ultimate Champion medal count to search for
        #[arg(long)]
        medals: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting deck-scout v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(Path::new(&cli.config))?;

    match cli.command {
        Commands::Serve { host, port } => {
            let client = ClashClient::from_config(&config.clash)?;
            let state = AppState {
                client: Arc::new(client),
            };
            let app = deck_scout::api::build_router(state);

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Lookup page: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Lookup { medals } => {
            let client = ClashClient::from_config(&config.clash)?;

            let rankings = client.ultimate_champion_rankings().await?;
            let Some(tag) = deck::find_tag_by_medals(&rankings.items, medals) else {
                eprintln!("No ranked player with {} medals.", medals);
                std::process::exit(1);
            };
            let tag = tag.to_string();
            println!("Matched {} at {} medals", tag, medals);

            let battles = client.battle_log(&tag).await?;
            match deck::latest_deck(&battles) {
                Some(cards) => {
                    println!("\n=== Latest Deck ===");
                    if cards.is_empty() {
                        println!("  (battle carried an empty deck)");
                    }
                    for card in &cards {
                        let level = card
                            .level
                            .map(|l| format!("level {}", l))
                            .unwrap_or_else(|| "level ?".to_string());
                        println!("  {:<24} {}", card.name, level);
                    }
                }
                None => {
                    eprintln!("No deck found in recent battles for {}.", tag);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
