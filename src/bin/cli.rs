//! NBA Predict CLI - command-line access to opponent-adjusted predictions

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

use nba_predict::config::{DEFAULT_BUNDLE_PATH, DEFAULT_RECENT_GAMES_PATH};
use nba_predict::data::{DataStore, RecentGames};
use nba_predict::models::{IndexResponse, PredictForm, Target};
use nba_predict::service::PredictionService;

#[derive(Parser)]
#[command(name = "nba-predict-cli")]
#[command(author, version, about = "NBA player stat prediction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the serialized model bundle
    #[arg(long, default_value = DEFAULT_BUNDLE_PATH)]
    bundle: PathBuf,

    /// Path to the recent games CSV
    #[arg(long, default_value = DEFAULT_RECENT_GAMES_PATH)]
    recent_games: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List player names
    Players,

    /// List teams with defensive ratings
    Teams,

    /// Predict a player's stats against an opponent
    Predict {
        /// Player name (exact match)
        #[arg(short, long)]
        player: String,

        /// Opponent team name
        #[arg(short, long)]
        opponent: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Players => {
            let store = load_store(&cli.bundle)?;
            for name in store.players() {
                println!("{}", name);
            }
        }
        Commands::Teams => {
            let store = load_store(&cli.bundle)?;
            list_teams(&store);
        }
        Commands::Predict {
            player,
            opponent,
            json,
        } => {
            let store = load_store(&cli.bundle)?;
            let recent_games = RecentGames::load_or_empty(&cli.recent_games);
            let service = PredictionService::new(store, recent_games);

            let form = PredictForm {
                player_name: Some(player),
                opponent_team: Some(opponent),
            };
            let response = service.submit(&form)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_prediction(&response);
            }
        }
    }

    Ok(())
}

fn load_store(path: &Path) -> Result<DataStore> {
    DataStore::load(path).with_context(|| format!("Failed to load model bundle from {:?}", path))
}

fn list_teams(store: &DataStore) {
    println!("{:<28} {:>6}", "Team", "DRtg");
    println!("{}", "-".repeat(35));
    for team in store.teams() {
        let rating = store.team_rating(team).unwrap_or(store.league_average());
        println!("{:<28} {:>6.1}", team, rating);
    }
    println!("{}", "-".repeat(35));
    println!("{:<28} {:>6.1}", "League average".bold(), store.league_average());
}

fn print_prediction(response: &IndexResponse) {
    let Some(ref prediction) = response.prediction else {
        println!("{}", "No prediction.".red());
        return;
    };

    println!(
        "{}: {} vs {}",
        "Prediction".green(),
        prediction.name.bold(),
        prediction.opponent
    );
    println!(
        "Opponent DRtg {:.1} / League avg {:.1} / Factor {:.2}",
        prediction.context.opp_drtg, prediction.context.league_avg, prediction.context.factor
    );
    println!();

    println!("{:<6} {:>10} {:>10}", "Stat", "Predicted", "Season avg");
    println!("{}", "-".repeat(28));
    for target in Target::ALL {
        let predicted = prediction.stats.get(target);
        let actual = prediction.actual_avg.get(target);
        let cell = format!("{:>10.1}", predicted);
        let cell = if predicted >= actual {
            cell.green()
        } else {
            cell.red()
        };
        println!("{:<6} {} {:>10.1}", target.column(), cell, actual);
    }

    if let Some(ref games) = response.last_7_data {
        println!();
        println!("{}", "Recent games:".yellow().bold());
        println!("{:<14} {:>4} {:>4} {:>4}", "Date", "PTS", "REB", "AST");
        for i in 0..games.dates.len() {
            println!(
                "{:<14} {:>4} {:>4} {:>4}",
                games.dates[i], games.pts[i], games.reb[i], games.ast[i]
            );
        }
    }
}
