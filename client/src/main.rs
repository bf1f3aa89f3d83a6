mod config;
mod console;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::games::tictactoe::PlayArea;
use tictactoe_common::{log, logger};

use config::{get_config_manager, ClientConfig, RenderMode};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe in the terminal")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file to use instead of the one next to the executable
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Draw marks with their icon names
    #[arg(long)]
    icons: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Falling back to default config: {}", e);
            ClientConfig::default()
        }
    };
    if args.icons {
        config.render_mode = RenderMode::Icons;
    }

    let mut area = PlayArea::new();
    log!("Starting session, render mode {:?}", config.render_mode);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::run_session(&mut area, &config, stdin.lock(), &mut stdout)?;

    Ok(())
}
