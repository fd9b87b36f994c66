//! Peg Gomoku GUI
//!
//! A graphical five-in-a-row game for 2 to 4 players on one screen.

use std::path::PathBuf;

use clap::Parser;
use gomoku::error::LaunchError;
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Peg Gomoku - five in a row for 2 to 4 players
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row board game for 2 to 4 players", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Number of players (2-4)
    #[arg(short, long)]
    players: Option<usize>,

    /// Board width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Board height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Points needed to win
    #[arg(long)]
    win_score: Option<u32>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

impl Cli {
    /// File config with command-line overrides applied, validated once
    fn resolve_config(&self) -> Result<GameConfig, LaunchError> {
        let mut config = GameConfig::from_file_or_default(&self.config)?;
        if let Some(players) = self.players {
            config.players = players;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(win_score) = self.win_score {
            config.win_score = win_score;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), LaunchError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", GameConfig::default_toml()?);
        return Ok(());
    }

    let config = cli.resolve_config()?;
    let session = Session::new(config)?;
    info!("launching GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Peg Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Peg Gomoku",
        options,
        Box::new(move |_cc| Ok(Box::new(GomokuApp::new(session)))),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku::ConfigError;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli::parse_from([
            "gomoku",
            "--config",
            "missing_gomoku_test.toml",
            "--players",
            "3",
            "--width",
            "19",
            "--win-score",
            "1",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.width, 19);
        assert_eq!(config.height, GameConfig::default().height);
        assert_eq!(config.win_score, 1);
    }

    #[test]
    fn test_cli_override_fixes_invalid_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, "players = 7\nwidth = 12\n").unwrap();
        let path = path.to_str().unwrap();

        let cli = Cli::parse_from(["gomoku", "--config", path, "--players", "3"]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.width, 12);

        let cli = Cli::parse_from(["gomoku", "--config", path]);
        assert!(matches!(
            cli.resolve_config(),
            Err(LaunchError::Config(ConfigError::Validation(_)))
        ));
    }

    #[test]
    fn test_cli_rejects_invalid_override() {
        let cli = Cli::parse_from(["gomoku", "--config", "missing_gomoku_test.toml", "-p", "6"]);
        assert!(cli.resolve_config().is_err());
    }
}
