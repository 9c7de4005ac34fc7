use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use matchday::config;
use matchday::football::{FootballClient, TableStore};
use matchday::navigation::{mount_message, Navigator};
use matchday::routing::Router;
use matchday::views::{HomeView, NotFoundView, TableView, ViewRegistry};

#[derive(Parser)]
#[command(name = "matchday-cli")]
#[command(about = "Inspect Matchday routes and query the football data API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Navigate through one or more paths, reporting each mounted view
    Resolve {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the markup a path renders
    Render { path: String },
    /// List the route table in evaluation order
    Routes,
    /// Fetch all leagues, one row per season
    Leagues,
    /// Fetch the teams of a league season
    Teams {
        #[arg(long)]
        league: Option<u32>,
        #[arg(long)]
        season: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let router = Arc::new(Router::site());

    match cli.command {
        Commands::Resolve { paths } => {
            let mut paths = paths.into_iter();
            let first = paths.next().unwrap_or_default();
            let mut navigator = Navigator::new(router.clone(), first.clone());
            println!("{first:<24} {}", mount_message(navigator.current().1));
            for path in paths {
                let view = navigator.navigate(path.clone());
                println!("{path:<24} {}", mount_message(view));
            }
        }
        Commands::Render { path } => {
            let views = ViewRegistry::new(
                HomeView::new(),
                TableView::new(TableStore::new()),
                NotFoundView::new(),
            );
            println!("{}", views.render(router.resolve(&path)));
        }
        Commands::Routes => {
            for route in router.routes() {
                println!("{:<24} {}", route.pattern(), route.view());
            }
        }
        Commands::Leagues => {
            let client = client(cli.config)?;
            print_json(&client.leagues().await?)?;
        }
        Commands::Teams { league, season } => {
            let settings = settings(cli.config)?;
            let client = FootballClient::new(&settings.football)?;
            let teams = client
                .teams(
                    league.unwrap_or(settings.football.league_id),
                    season.unwrap_or(settings.football.season),
                )
                .await?;
            print_json(&teams)?;
        }
    }

    Ok(())
}

fn settings(path: Option<PathBuf>) -> Result<matchday::SiteConfig, config::ConfigError> {
    let _ = dotenvy::dotenv();
    config::load(path.as_deref())
}

fn client(path: Option<PathBuf>) -> Result<FootballClient, Box<dyn std::error::Error>> {
    Ok(FootballClient::new(&settings(path)?.football)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
