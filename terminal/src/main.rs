mod commands;
mod config;
mod render;
mod runners;

use std::io;

use arcade_engine::Validate;
use arcade_engine::games::SessionRng;
use arcade_engine::games::connect_four::Player;
use arcade_engine::{debug_log, log, logger};
use clap::{Parser, Subcommand, ValueEnum};
use config::{Preferences, PreferencesStore, default_preferences_path};

#[derive(Parser)]
#[command(name = "arcade", about = "Connect Four, Minesweeper and Klondike in the terminal")]
struct Args {
    /// Preferences file (YAML). Defaults to arcade_preferences.yaml next to the binary.
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    game: GameArgs,
}

#[derive(Subcommand)]
enum GameArgs {
    ConnectFour {
        #[arg(long, value_enum)]
        play_as: Option<PlayerArg>,
        #[arg(long)]
        ai_delay_ms: Option<u64>,
        /// Write the overrides back to the preferences file.
        #[arg(long)]
        save: bool,
    },
    Minesweeper {
        #[arg(long)]
        rows: Option<usize>,
        #[arg(long)]
        cols: Option<usize>,
        #[arg(long)]
        mines: Option<usize>,
        #[arg(long)]
        save: bool,
    },
    Solitaire,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlayerArg {
    Red,
    Yellow,
}

impl From<PlayerArg> for Player {
    fn from(value: PlayerArg) -> Self {
        match value {
            PlayerArg::Red => Player::Red,
            PlayerArg::Yellow => Player::Yellow,
        }
    }
}

/// Applies command line overrides and reports whether they should be saved.
fn apply_overrides(preferences: &mut Preferences, game: &GameArgs) -> bool {
    match *game {
        GameArgs::ConnectFour { play_as, ai_delay_ms, save } => {
            if let Some(player) = play_as {
                preferences.connect_four.human = player.into();
            }
            if let Some(delay) = ai_delay_ms {
                preferences.connect_four.ai_delay_ms = delay;
            }
            save
        }
        GameArgs::Minesweeper { rows, cols, mines, save } => {
            let settings = &mut preferences.minesweeper;
            settings.rows = rows.unwrap_or(settings.rows);
            settings.cols = cols.unwrap_or(settings.cols);
            settings.mines = mines.unwrap_or(settings.mines);
            save
        }
        GameArgs::Solitaire => false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arcade".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let path = args.config.clone().unwrap_or_else(default_preferences_path);
    let store = PreferencesStore::from_yaml_file(&path);
    let mut preferences: Preferences = store.load()?;
    debug_log!("Preferences loaded from {}", path);

    let save = apply_overrides(&mut preferences, &args.game);
    preferences.validate()?;
    if save {
        store.save(&preferences)?;
        log!("Preferences saved to {}", path);
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut rng = SessionRng::from_random();

    match args.game {
        GameArgs::ConnectFour { .. } => {
            runners::run_connect_four(stdin.lock(), &mut stdout, &preferences.connect_four)?
        }
        GameArgs::Minesweeper { .. } => {
            runners::run_minesweeper(stdin.lock(), &mut stdout, preferences.minesweeper, &mut rng)?
        }
        GameArgs::Solitaire => runners::run_solitaire(stdin.lock(), &mut stdout, &mut rng)?,
    }

    log!("Goodbye");
    Ok(())
}
