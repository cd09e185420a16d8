mod game_loop;
mod render;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, GameConfig};
use tictactoe_engine::{ConfigError, Difficulty, GameMode, SessionRng, log, logger};

use game_loop::GameLoop;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe in the terminal")]
struct Args {
    /// YAML file holding mode, level and thinking delay
    #[arg(long, default_value = "tictactoe.yaml")]
    config: PathBuf,

    /// pvp or pvc, overrides the config file
    #[arg(long)]
    mode: Option<GameMode>,

    /// easy, medium or hard, overrides the config file
    #[arg(long)]
    level: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Write the resolved mode and level back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn resolve_config(args: &Args) -> Result<GameConfig, ConfigError> {
    let manager: ConfigManager<_, GameConfig> = ConfigManager::from_yaml_file(&args.config);

    let overridden = args.mode.is_some() || args.level.is_some() || args.delay_ms.is_some();
    let mut config = match manager.get_config() {
        Ok(config) => config,
        Err(ConfigError::Missing(_)) if overridden => GameConfig::default(),
        Err(err) => return Err(err),
    };

    if let Some(mode) = args.mode {
        config.mode = Some(mode);
    }
    if let Some(level) = args.level {
        config.level = Some(level);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.thinking_delay_ms = delay_ms;
    }

    if args.save_config {
        manager.set_config(&config)?;
        log!("Saved config to {}", args.config.display());
    }

    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = match resolve_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let settings = match config.session_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} game, seed {}",
        settings.mode(),
        rng.seed()
    );

    let stdin = io::stdin();
    let mut game_loop = GameLoop::new(settings, rng, config.thinking_delay_ms);
    match game_loop.run(stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
