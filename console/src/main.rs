mod console_config;
mod input;
mod render;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use connect_engine::config::ConfigManager;
use connect_engine::{GameConfig, GameSession, log, logger};
use console_config::{ConsoleConfig, ConsoleConfigManager, get_config_manager};

#[derive(Clone, Copy, ValueEnum)]
enum Variant {
    /// 7x7 board, four in a row
    Four,
    /// 5x5 board, three in a row
    Three,
}

#[derive(Parser)]
#[command(name = "connect_console", about = "Play N-in-a-row against a friend or the engine")]
struct Args {
    #[arg(long, value_enum)]
    variant: Option<Variant>,
    #[arg(long)]
    two_player: bool,
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long)]
    alpha_beta: bool,
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

fn apply_overrides(mut config: ConsoleConfig, args: &Args) -> ConsoleConfig {
    if let Some(variant) = args.variant {
        let preset = match variant {
            Variant::Four => GameConfig::connect_four(),
            Variant::Three => GameConfig::connect_three(),
        };
        config.game = GameConfig {
            single_player: config.game.single_player,
            search_depth: config.game.search_depth,
            pruning: config.game.pruning,
            ..preset
        };
    }
    if args.two_player {
        config.game.single_player = false;
    }
    if let Some(depth) = args.depth {
        config.game.search_depth = depth;
    }
    if args.alpha_beta {
        config.game.pruning = true;
    }
    config
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let manager: ConsoleConfigManager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path.clone()),
        None => get_config_manager(),
    };
    let config = apply_overrides(manager.get_config()?, &args);

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.save_config {
        manager.set_config(&config)?;
        log!("Saved settings");
    }

    let mut session = GameSession::new(config.game.clone())?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let snapshot = runner::run_game(&mut session, stdin.lock(), &mut stdout)?;

    log!("Session finished with status {:?}", snapshot.status);
    Ok(())
}
